use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Path, Type, parse_macro_input, parse_quote};

/// Derives the `TickSource` trait for a struct from a platform tick function.
///
/// This macro binds a free function returning the current tick count (a HAL's
/// `millis()`, an RTOS tick getter, ...) to a type, usually a zero-sized one,
/// so that timers built on it carry no clock state.
///
/// # Example
///
/// ```ignore
/// use elapsed_millis::{Micros, TickSource};
///
/// #[derive(Clone, Copy, TickSource)]
/// #[tick_source(now = hal::millis)]
/// pub struct SysTick;
///
/// #[derive(Clone, Copy, TickSource)]
/// #[tick_source(now = hal::micros, tick = u64, rate = Micros)]
/// pub struct HighRes;
/// ```
///
/// This generates (for `SysTick`):
///
/// ```ignore
/// impl ::elapsed_millis::TickSource for SysTick {
///     type Tick = u32;
///     type Rate = ::elapsed_millis::Millis;
///
///     fn now(&self) -> Self::Tick {
///         hal::millis()
///     }
/// }
/// ```
///
/// # Properties
///
/// - `now` (required): path to a `fn() -> Tick`
/// - `tick`: counter width, default `u32`
/// - `rate`: `TickRate` of the counter, default `Millis`
#[proc_macro_derive(TickSource, attributes(tick_source))]
pub fn derive_tick_source(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    if !matches!(input.data, Data::Struct(_)) {
        return syn::Error::new_spanned(&input, "TickSource can only be derived for structs")
            .to_compile_error()
            .into();
    }

    // Collect #[tick_source(...)] properties
    let mut now: Option<Path> = None;
    let mut tick: Option<Type> = None;
    let mut rate: Option<Type> = None;

    for attr in input
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("tick_source"))
    {
        let result = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("now") {
                now = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("tick") {
                tick = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("rate") {
                rate = Some(meta.value()?.parse()?);
            } else {
                return Err(meta.error("expected `now`, `tick` or `rate`"));
            }
            Ok(())
        });

        if let Err(err) = result {
            return err.to_compile_error().into();
        }
    }

    let Some(now) = now else {
        return syn::Error::new_spanned(
            name,
            "TickSource derive requires #[tick_source(now = path::to::tick_fn)]",
        )
        .to_compile_error()
        .into();
    };

    let tick = tick.unwrap_or_else(|| parse_quote!(u32));
    let rate = rate.unwrap_or_else(|| parse_quote!(::elapsed_millis::Millis));

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Generate the impl block
    let expanded = quote! {
        impl #impl_generics ::elapsed_millis::TickSource for #name #ty_generics #where_clause {
            type Tick = #tick;
            type Rate = #rate;

            #[inline]
            fn now(&self) -> Self::Tick {
                #now()
            }
        }
    };

    TokenStream::from(expanded)
}

use proc_macro::TokenStream;
use quote::{ToTokens, quote};
use syn::{FnArg, ImplItem, ItemImpl, ReturnType, Signature, Type, Visibility, parse_macro_input};

/// Implements `wiregizmo_reflect::ReflectType` for the self type of an
/// inherent impl block, recording every `pub fn` in declaration order.
///
/// The impl block itself is emitted unchanged. Only one annotated impl block
/// per type is allowed, since each generates a `ReflectType` impl.
///
/// # Usage
///
/// ```ignore
/// #[reflect_methods]
/// impl DebugDrawer {
///     pub fn current_tick(&self) -> u64 { ... }
///     pub fn advance_tick(&self, delta_seconds: f32) { ... }
///     fn flush(&self) { ... } // not public, not recorded
/// }
///
/// // DebugDrawer::METHODS ==
/// // [("current_tick", "fn current_tick(&self) -> u64"),
/// //  ("advance_tick", "fn advance_tick(&self, delta_seconds: f32)")]
/// ```
#[proc_macro_attribute]
pub fn reflect_methods(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[reflect_methods] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(item as ItemImpl);

    if let Some((_, path, _)) = &input.trait_ {
        return syn::Error::new_spanned(
            path,
            "#[reflect_methods] must be placed on an inherent impl block",
        )
        .to_compile_error()
        .into();
    }

    let self_ty = &input.self_ty;
    let name_str = extract_last_segment(self_ty);
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    let methods = input.items.iter().filter_map(|item| match item {
        ImplItem::Fn(method) if matches!(method.vis, Visibility::Public(_)) => {
            let name = method.sig.ident.to_string();
            let signature = format_signature(&method.sig);
            Some(quote! {
                ::wiregizmo_reflect::MethodInfo::new(#name, #signature)
            })
        }
        _ => None,
    });

    let expanded = quote! {
        #input

        impl #impl_generics ::wiregizmo_reflect::ReflectType for #self_ty #where_clause {
            const NAME: &'static str = #name_str;
            const METHODS: &'static [::wiregizmo_reflect::MethodInfo] = &[#(#methods),*];
        }
    };

    expanded.into()
}

/// Extract the last segment name from a type path (e.g. `crate::DebugDrawer` → `"DebugDrawer"`).
fn extract_last_segment(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) => {
            if let Some(segment) = type_path.path.segments.last() {
                segment.ident.to_string()
            } else {
                String::new()
            }
        }
        other => tokens_to_string(other),
    }
}

/// Render a signature the way it is usually written, without visibility:
/// `fn name<G>(&self, arg: Type) -> Ret`.
fn format_signature(sig: &Signature) -> String {
    let mut out = String::new();
    if sig.constness.is_some() {
        out.push_str("const ");
    }
    if sig.asyncness.is_some() {
        out.push_str("async ");
    }
    if sig.unsafety.is_some() {
        out.push_str("unsafe ");
    }
    out.push_str("fn ");
    out.push_str(&sig.ident.to_string());
    if !sig.generics.params.is_empty() {
        out.push_str(&tokens_to_string(&sig.generics));
    }

    let params: Vec<String> = sig
        .inputs
        .iter()
        .map(|arg| match arg {
            FnArg::Receiver(receiver) => tokens_to_string(receiver),
            FnArg::Typed(typed) => format!(
                "{}: {}",
                tokens_to_string(&typed.pat),
                tokens_to_string(&typed.ty)
            ),
        })
        .collect();
    out.push('(');
    out.push_str(&params.join(", "));
    out.push(')');

    if let ReturnType::Type(_, ty) = &sig.output {
        out.push_str(" -> ");
        out.push_str(&tokens_to_string(ty));
    }

    if let Some(where_clause) = &sig.generics.where_clause {
        out.push(' ');
        out.push_str(&tokens_to_string(where_clause));
    }
    out
}

/// Token spacing rewrites, applied in order.
const SPACING_FIXES: &[(&str, &str)] = &[
    (" :: ", "::"),
    (":: ", "::"),
    (" ::", "::"),
    (" : ", ": "),
    (" < ", "<"),
    ("< ", "<"),
    (" <", "<"),
    (" >", ">"),
    ("& ", "&"),
    (" ,", ","),
    (" ;", ";"),
    ("( ", "("),
    (" )", ")"),
    ("[ ", "["),
    (" ]", "]"),
    (" (", "("),
    ("->(", "-> ("),
];

/// Stringify tokens and collapse the spacing `proc_macro2` inserts between
/// every token (`& self`, `Vec < u8 >`, `glam :: Vec3`).
fn tokens_to_string(tokens: &impl ToTokens) -> String {
    let mut s = tokens.to_token_stream().to_string();
    for (from, to) in SPACING_FIXES {
        s = s.replace(from, to);
    }
    s
}

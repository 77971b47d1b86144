use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token, Type, TypePath,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the struct attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Role of a field inside a record, set with `#[node(link)]` or `#[node(data)]`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum FieldRole {
    Link,
    Data,
}

impl Parse for FieldRole {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        match key.to_string().as_str() {
            "link" => Ok(FieldRole::Link),
            "data" => Ok(FieldRole::Data),
            _ => Err(syn::Error::new(key.span(), "expected `link` or `data`")),
        }
    }
}

fn field_role(field: &Field) -> syn::Result<Option<FieldRole>> {
    for attr in &field.attrs {
        if attr.path().is_ident("node") {
            return attr.parse_args::<FieldRole>().map(Some);
        }
    }
    Ok(None)
}

/// Picks the field tagged with `role`, falling back to the field called `fallback`.
fn pick_field<'a>(
    tagged: &[(&'a Field, FieldRole)],
    fields: &'a [Field],
    role: FieldRole,
    fallback: &str,
) -> syn::Result<Option<&'a Field>> {
    let mut found = tagged.iter().filter(|(_, r)| *r == role).map(|(f, _)| *f);
    match (found.next(), found.next()) {
        (Some(_), Some(second)) => Err(syn::Error::new_spanned(
            second,
            format!("only one field may be marked `#[node({fallback})]`"),
        )),
        (Some(field), None) => Ok(Some(field)),
        (None, _) => Ok(fields
            .iter()
            .find(|f| f.ident.as_ref().is_some_and(|i| *i == fallback))),
    }
}

/// Derive macro turning a record with an embedded `SingleLink` into a list node.
///
/// Generates the offset projection between the record and its link, plus the
/// `Link` and `Node` implementations. If a payload field is present (marked
/// `#[node(data)]` or named `data`), `NodeWithData` is implemented as well.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path: TokenStream2 = quote! { ::slist };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            match attr.parse_args::<NodeAttribute>() {
                Ok(node_attr) => {
                    let path = node_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let intrusive_path: TokenStream2 = quote! { #crate_path::linked_list::intrusive };

    let fields: Vec<Field> = if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        fields.named.iter().cloned().collect()
    } else {
        return syn::Error::new_spanned(
            &input,
            "Node derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let mut tagged = Vec::new();
    for field in &fields {
        match field_role(field) {
            Ok(Some(role)) => tagged.push((field, role)),
            Ok(None) => {}
            Err(e) => return e.to_compile_error().into(),
        }
    }

    let link_field = match pick_field(&tagged, &fields, FieldRole::Link, "link") {
        Ok(Some(field)) => field,
        Ok(None) => {
            return syn::Error::new_spanned(
                struct_name,
                "Struct must have a field named 'link' or a field marked #[node(link)]",
            )
            .to_compile_error()
            .into();
        }
        Err(e) => return e.to_compile_error().into(),
    };
    let data_field = match pick_field(&tagged, &fields, FieldRole::Data, "data") {
        Ok(field) => field,
        Err(e) => return e.to_compile_error().into(),
    };

    let link_type = &link_field.ty;
    let is_single_link = matches!(
        link_type,
        Type::Path(TypePath { path, .. })
            if path.segments.last().is_some_and(|s| s.ident == "SingleLink")
    );
    if !is_single_link {
        return syn::Error::new_spanned(link_type, "Link field must be a 'SingleLink'")
            .to_compile_error()
            .into();
    }
    let link_ident = &link_field.ident;

    // Generate `Projection`, `Link` and `Node` trait implementations
    let node_impl: TokenStream2 = quote! {
        unsafe impl #impl_generics #intrusive_path::traits::Projection
            for #struct_name #ty_generics #where_clause
        {
            const LINK_OFFSET: usize =
                ::core::mem::offset_of!(#struct_name #ty_generics, #link_ident);
        }

        impl #impl_generics #intrusive_path::traits::Link
            for #struct_name #ty_generics #where_clause
        {
            type Target = Self;

            #[inline]
            fn next(&self) -> Option<::core::ptr::NonNull<Self::Target>> {
                #intrusive_path::traits::Link::next(&self.#link_ident).map(|link| unsafe {
                    <Self as #intrusive_path::traits::Projection>::from_link(link)
                })
            }

            #[inline]
            unsafe fn set_next(&mut self, next: Option<::core::ptr::NonNull<Self::Target>>) {
                unsafe {
                    #intrusive_path::traits::Link::set_next(
                        &mut self.#link_ident,
                        next.map(<Self as #intrusive_path::traits::Projection>::to_link),
                    );
                }
            }
        }

        impl #impl_generics #intrusive_path::traits::Node
            for #struct_name #ty_generics #where_clause
        {
        }
    };

    // Generate `NodeWithData` trait implementation if a payload field exists
    let data_impl: TokenStream2 = if let Some(data_field) = data_field {
        let data_ident = &data_field.ident;
        let data_type = &data_field.ty;
        quote! {
            impl #impl_generics #intrusive_path::traits::NodeWithData
                for #struct_name #ty_generics #where_clause
            {
                type Data = #data_type;

                #[inline]
                fn data(&self) -> &Self::Data {
                    &self.#data_ident
                }

                #[inline]
                fn data_mut(&mut self) -> &mut Self::Data {
                    &mut self.#data_ident
                }
            }
        }
    } else {
        quote! {}
    };

    let expanded = quote! {
        #node_impl
        #data_impl
    };

    TokenStream::from(expanded)
}

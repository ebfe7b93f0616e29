//! Per-field attribute parsing

use syn::ext::IdentExt;
use syn::{Attribute, Expr, ExprLit, Field, Lit, LitStr, Meta, Result, Visibility};

/// What the derive needs to know about one named field.
pub struct FieldSpec {
    pub ident: syn::Ident,
    pub ty: syn::Type,
    pub name: String,
    pub exported: bool,
    pub rule: Option<LitStr>,
}

impl FieldSpec {
    /// Whether the field's value is read by the generated code.
    pub fn is_inspected(&self) -> bool {
        self.exported && self.rule.is_some()
    }

    pub fn from_field(field: &Field) -> Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;

        Ok(Self {
            name: ident.unraw().to_string(),
            exported: !matches!(field.vis, Visibility::Inherited),
            rule: rule_attr(&field.attrs)?,
            ty: field.ty.clone(),
            ident,
        })
    }
}

/// Read `#[validate("kind:arg")]` or `#[validate = "kind:arg"]`.
fn rule_attr(attrs: &[Attribute]) -> Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("validate")) {
        let rule = match &attr.meta {
            Meta::List(list) => list.parse_args::<LitStr>()?,
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => s.clone(),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a string literal like `\"len:5\"`",
                    ))
                }
            },
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected `#[validate(\"kind:arg\")]`",
                ))
            }
        };

        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "only one `validate` rule is allowed per field",
            ));
        }
        found = Some(rule);
    }

    Ok(found)
}

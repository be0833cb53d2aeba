//! Parsing of #[validate(...)] attributes

use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, LitStr};

/// Items accepted inside `#[validate(...)]`, for diagnostics.
const KNOWN_ITEMS: &str = "min_length, max_length, exact_length, not_empty, utf8, alphabetic, \
                           uppercase, lowercase, alphanumeric, digits, gt, ge, lt, le, non_zero, \
                           positive, non_negative, negative, non_positive, not_nan, not_null, \
                           not(..), constraint, rename";

// ============================================================================
// CONSTRAINT ITEMS
// ============================================================================

/// One constraint named in a `#[validate(...)]` list.
#[derive(Debug, Clone)]
pub(super) enum Item {
    MinLength(Expr),
    MaxLength(Expr),
    ExactLength(Expr),
    NotEmpty,
    Utf8,
    Alphabetic,
    Uppercase,
    Lowercase,
    Alphanumeric,
    Digits,
    Gt(Expr),
    Ge(Expr),
    Lt(Expr),
    Le(Expr),
    NonZero,
    Positive,
    NonNegative,
    Negative,
    NonPositive,
    NotNan,
    NotNull,
    Not(Box<Attachment>),
    /// `constraint = "expr"`: any value implementing `Constraint<FieldType>`.
    Custom(Expr),
}

impl Item {
    /// The constraint kind this item builds, if the macro can see it.
    ///
    /// Convenience items share the kind of the primitive they are built
    /// from, so `not_empty` and `min_length = 1` collide.
    pub(super) fn kind(&self) -> Option<String> {
        let kind = match self {
            Self::MinLength(_) | Self::NotEmpty => "min_length",
            Self::MaxLength(_) => "max_length",
            Self::ExactLength(_) => "exact_length",
            Self::Utf8 => "utf8",
            Self::Alphabetic => "alphabetic",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Alphanumeric => "alphanumeric",
            Self::Digits => "digits",
            Self::Gt(_) | Self::Positive => "greater_than",
            Self::Ge(_) | Self::NonNegative => "greater_than_or_equal",
            Self::Lt(_) | Self::Negative => "less_than",
            Self::Le(_) | Self::NonPositive => "less_than_or_equal",
            Self::NonZero => "non_zero",
            Self::NotNan => "not_nan",
            Self::NotNull => "not_null",
            Self::Not(inner) => return inner.item.kind().map(|kind| format!("not({kind})")),
            Self::Custom(_) => return None,
        };
        Some(kind.to_owned())
    }

    /// Expression constructing the constraint value.
    fn constructor(&self, span: Span) -> TokenStream {
        let path = quote_spanned!(span=> ::sift_validator::constraints);
        match self {
            Self::MinLength(n) => quote_spanned!(span=> #path::min_length(#n)),
            Self::MaxLength(n) => quote_spanned!(span=> #path::max_length(#n)),
            Self::ExactLength(n) => quote_spanned!(span=> #path::exact_length(#n)),
            Self::NotEmpty => quote_spanned!(span=> #path::NOT_EMPTY),
            Self::Utf8 => quote_spanned!(span=> #path::utf8()),
            Self::Alphabetic => quote_spanned!(span=> #path::alphabetic()),
            Self::Uppercase => quote_spanned!(span=> #path::uppercase()),
            Self::Lowercase => quote_spanned!(span=> #path::lowercase()),
            Self::Alphanumeric => quote_spanned!(span=> #path::alphanumeric()),
            Self::Digits => quote_spanned!(span=> #path::digits()),
            Self::Gt(bound) => quote_spanned!(span=> #path::greater_than(#bound)),
            Self::Ge(bound) => quote_spanned!(span=> #path::greater_than_or_equal(#bound)),
            Self::Lt(bound) => quote_spanned!(span=> #path::less_than(#bound)),
            Self::Le(bound) => quote_spanned!(span=> #path::less_than_or_equal(#bound)),
            Self::NonZero => quote_spanned!(span=> #path::non_zero()),
            Self::Positive => quote_spanned!(span=> #path::positive()),
            Self::NonNegative => quote_spanned!(span=> #path::non_negative()),
            Self::Negative => quote_spanned!(span=> #path::negative()),
            Self::NonPositive => quote_spanned!(span=> #path::non_positive()),
            Self::NotNan => quote_spanned!(span=> #path::not_nan()),
            Self::NotNull => quote_spanned!(span=> #path::not_null()),
            Self::Not(inner) => {
                let inner = inner.constructor();
                quote_spanned!(span=> ::sift_validator::combinators::not(#inner))
            }
            Self::Custom(expr) => quote!(#expr),
        }
    }
}

/// An [`Item`] with the span of the attribute tokens that named it.
#[derive(Debug, Clone)]
pub(super) struct Attachment {
    pub item: Item,
    pub span: Span,
}

impl Attachment {
    /// Expression constructing the constraint, spanned at the attribute item
    /// so that type mismatches point there.
    pub(super) fn constructor(&self) -> TokenStream {
        self.item.constructor(self.span)
    }
}

// ============================================================================
// FIELD ATTRIBUTES
// ============================================================================

/// Everything `#[validate(...)]` says about one field.
#[derive(Debug, Default, Clone)]
pub(super) struct FieldAttrs {
    /// Name used in errors instead of the field identifier.
    pub rename: Option<LitStr>,
    /// Constraints in attachment order.
    pub attachments: Vec<Attachment>,
}

impl FieldAttrs {
    /// Parse validation attributes from a list of attributes.
    ///
    /// Several `#[validate]` attributes on one field are read in order, as if
    /// they were one list.
    pub(super) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("validate") {
                continue;
            }

            attr.parse_nested_meta(|meta| result.parse_meta(&meta))?;
        }

        Ok(result)
    }

    fn parse_meta(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("rename") {
            if self.rename.is_some() {
                return Err(meta.error("duplicate `rename`"));
            }
            let name: LitStr = meta.value()?.parse()?;
            if name.value().is_empty() {
                return Err(syn::Error::new(name.span(), "field names must not be empty"));
            }
            self.rename = Some(name);
            return Ok(());
        }

        self.attachments.push(parse_attachment(meta)?);
        Ok(())
    }
}

/// Parses one constraint item.
fn parse_attachment(meta: &ParseNestedMeta<'_>) -> syn::Result<Attachment> {
    let span = syn::spanned::Spanned::span(&meta.path);
    let Some(ident) = meta.path.get_ident() else {
        return Err(meta.error(format!("expected one of: {KNOWN_ITEMS}")));
    };

    let item = match ident.to_string().as_str() {
        "min_length" => Item::MinLength(meta.value()?.parse()?),
        "max_length" => Item::MaxLength(meta.value()?.parse()?),
        "exact_length" => Item::ExactLength(meta.value()?.parse()?),
        "not_empty" => Item::NotEmpty,
        "utf8" => Item::Utf8,
        "alphabetic" => Item::Alphabetic,
        "uppercase" => Item::Uppercase,
        "lowercase" => Item::Lowercase,
        "alphanumeric" => Item::Alphanumeric,
        "digits" => Item::Digits,
        "gt" => Item::Gt(meta.value()?.parse()?),
        "ge" => Item::Ge(meta.value()?.parse()?),
        "lt" => Item::Lt(meta.value()?.parse()?),
        "le" => Item::Le(meta.value()?.parse()?),
        "non_zero" => Item::NonZero,
        "positive" => Item::Positive,
        "non_negative" => Item::NonNegative,
        "negative" => Item::Negative,
        "non_positive" => Item::NonPositive,
        "not_nan" => Item::NotNan,
        "not_null" => Item::NotNull,
        "not" => Item::Not(Box::new(parse_negated(meta)?)),
        "constraint" => {
            let source: LitStr = meta.value()?.parse()?;
            Item::Custom(source.parse()?)
        }
        other => {
            return Err(meta.error(format!(
                "unknown validation item `{other}`; expected one of: {KNOWN_ITEMS}"
            )));
        }
    };

    Ok(Attachment { item, span })
}

/// Parses the single item inside `not(...)`.
fn parse_negated(meta: &ParseNestedMeta<'_>) -> syn::Result<Attachment> {
    let mut inner = Vec::new();
    meta.parse_nested_meta(|nested| {
        if nested.path.is_ident("rename") {
            return Err(nested.error("`rename` cannot be negated"));
        }
        inner.push(parse_attachment(&nested)?);
        Ok(())
    })?;

    let mut inner = inner.into_iter();
    match (inner.next(), inner.next()) {
        (Some(attachment), None) => Ok(attachment),
        _ => Err(meta.error("`not(...)` takes exactly one constraint")),
    }
}

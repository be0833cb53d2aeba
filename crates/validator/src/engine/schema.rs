//! Per-type field attachments and the validation fold.
//!
//! A [`Schema`] is the explicit "field name → ordered constraint list"
//! declaration of a record type. It is assembled once through
//! [`Schema::builder`], checked for well-formedness in
//! [`SchemaBuilder::build`], and immutable afterwards.

use std::any::{TypeId, type_name};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::engine::{ValidationMode, ValidationResult};
use crate::foundation::{
    Constraint, DefinitionError, ValidationError, ValidationErrors, first_failure,
};

type BoxedConstraint<T> = Box<dyn Constraint<T> + Send + Sync>;

// ============================================================================
// FIELD ATTACHMENT
// ============================================================================

/// A failed check on one field.
struct Failure {
    kind: &'static str,
    message: Cow<'static, str>,
}

/// One field of `R` with its constraints, with the field type erased.
trait Attached<R>: Send + Sync {
    fn name(&self) -> &Cow<'static, str>;

    fn kinds(&self) -> &[&'static str];

    fn check(&self, record: &R) -> Option<Failure>;
}

struct FieldEntry<R, T: ?Sized, A> {
    name: Cow<'static, str>,
    accessor: A,
    kinds: SmallVec<[&'static str; 4]>,
    type_ids: SmallVec<[TypeId; 4]>,
    constraints: SmallVec<[BoxedConstraint<T>; 4]>,
    _record: PhantomData<fn(&R)>,
}

impl<R, T, A> Attached<R> for FieldEntry<R, T, A>
where
    T: ?Sized + 'static,
    A: Fn(&R) -> &T + Send + Sync,
{
    fn name(&self) -> &Cow<'static, str> {
        &self.name
    }

    fn kinds(&self) -> &[&'static str] {
        &self.kinds
    }

    fn check(&self, record: &R) -> Option<Failure> {
        let value = (self.accessor)(record);
        let constraints = self
            .constraints
            .iter()
            .map(|constraint| &**constraint as &dyn Constraint<T>);

        first_failure(value, constraints).map(|failed| Failure {
            kind: failed.kind_name(),
            message: failed.error_message(),
        })
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// The validated fields of record type `R`, in declaration order.
///
/// # Examples
///
/// ```rust
/// use sift_validator::engine::{Schema, ValidationMode};
/// use sift_validator::prelude::*;
///
/// struct Signup {
///     name: String,
///     age: i32,
/// }
///
/// let schema = Schema::builder()
///     .field("name", |s: &Signup| &s.name)
///     .constraint(NOT_EMPTY)
///     .field("age", |s: &Signup| &s.age)
///     .constraint(non_negative())
///     .build()
///     .unwrap();
///
/// let result = schema.validate(Signup { name: String::new(), age: 32 }, ValidationMode::CollectAll);
/// assert!(!result.is_ok());
/// assert_eq!(result.errors().as_slice()[0].to_string(), "name: length must be >= 1");
/// ```
pub struct Schema<R> {
    fields: Vec<Box<dyn Attached<R>>>,
}

impl<R: 'static> Schema<R> {
    /// Starts declaring a schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder<R> {
        SchemaBuilder {
            fields: Vec::new(),
            error: None,
        }
    }
}

impl<R> Schema<R> {
    /// Number of fields carrying constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field carries constraints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|field| field.name().as_ref())
    }

    /// Kind names attached to `field`, in attachment order.
    #[must_use]
    pub fn constraint_kinds(&self, field: &str) -> Option<&[&'static str]> {
        self.fields
            .iter()
            .find(|entry| entry.name() == field)
            .map(|entry| entry.kinds())
    }

    /// Validates `record`, handing it back inside the result.
    pub fn validate(&self, record: R, mode: ValidationMode) -> ValidationResult<R> {
        let errors = self.errors_for(&record, mode);
        ValidationResult::new(record, errors)
    }

    /// Checks `record` without taking ownership and returns the failures.
    ///
    /// Each failing field contributes one error: the message of its first
    /// failing constraint. In [`ValidationMode::BailOut`] evaluation stops
    /// at the first failure.
    pub fn errors_for(&self, record: &R, mode: ValidationMode) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for field in &self.fields {
            let Some(failure) = field.check(record) else {
                continue;
            };
            trace!(
                field = %field.name(),
                kind = failure.kind,
                message = %failure.message,
                "constraint failed"
            );
            errors.push(ValidationError::new(field.name().clone(), failure.message));
            if mode == ValidationMode::BailOut {
                break;
            }
        }

        if !errors.is_empty() {
            debug!(
                record = type_name::<R>(),
                ?mode,
                errors = errors.len(),
                "validation failed"
            );
        }
        errors
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|field| (field.name(), field.kinds())))
            .finish()
    }
}

// ============================================================================
// BUILDERS
// ============================================================================

/// Declares the fields of a [`Schema`] in order.
///
/// Definition errors do not interrupt the chain; the first one is returned
/// from [`build`](Self::build).
#[must_use = "a schema builder does nothing until `build` is called"]
pub struct SchemaBuilder<R> {
    fields: Vec<Box<dyn Attached<R>>>,
    error: Option<DefinitionError>,
}

impl<R: 'static> SchemaBuilder<R> {
    /// Declares the next field. `accessor` projects the field out of a record.
    pub fn field<T, A>(self, name: impl Into<Cow<'static, str>>, accessor: A) -> FieldBuilder<R, T, A>
    where
        T: ?Sized + 'static,
        A: Fn(&R) -> &T + Send + Sync + 'static,
    {
        let mut builder = self;
        let name = name.into();

        if name.is_empty() {
            builder.fail(DefinitionError::EmptyFieldName);
        } else if builder.fields.iter().any(|field| *field.name() == name) {
            builder.fail(DefinitionError::DuplicateField {
                field: name.clone(),
            });
        }

        FieldBuilder {
            parent: builder,
            entry: FieldEntry {
                name,
                accessor,
                kinds: SmallVec::new(),
                type_ids: SmallVec::new(),
                constraints: SmallVec::new(),
                _record: PhantomData,
            },
        }
    }

    /// Finishes the declaration.
    ///
    /// # Errors
    ///
    /// Returns the first [`DefinitionError`] met while declaring fields.
    pub fn build(self) -> Result<Schema<R>, DefinitionError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        debug!(
            record = type_name::<R>(),
            fields = self.fields.len(),
            "schema built"
        );
        Ok(Schema {
            fields: self.fields,
        })
    }

    fn fail(&mut self, error: DefinitionError) {
        self.error.get_or_insert(error);
    }
}

/// Attaches constraints to the field most recently declared.
#[must_use = "a schema builder does nothing until `build` is called"]
pub struct FieldBuilder<R, T: ?Sized, A> {
    parent: SchemaBuilder<R>,
    entry: FieldEntry<R, T, A>,
}

impl<R, T, A> FieldBuilder<R, T, A>
where
    R: 'static,
    T: ?Sized + 'static,
    A: Fn(&R) -> &T + Send + Sync + 'static,
{
    /// Attaches `constraint` after the ones already on this field.
    ///
    /// Attaching a kind that is already present is a definition error,
    /// whatever its parameters. Kinds are told apart by type, not by
    /// [`kind_name`](crate::foundation::ConstraintKind::kind_name).
    pub fn constraint<C>(mut self, constraint: C) -> Self
    where
        C: Constraint<T> + Send + Sync + 'static,
    {
        let kind = constraint.kind_name();
        let type_id = TypeId::of::<C>();
        if self.entry.type_ids.contains(&type_id) {
            self.parent.fail(DefinitionError::DuplicateConstraint {
                field: self.entry.name.clone(),
                kind,
            });
            return self;
        }
        self.entry.kinds.push(kind);
        self.entry.type_ids.push(type_id);
        self.entry.constraints.push(Box::new(constraint));
        self
    }

    /// Declares the next field.
    pub fn field<U, B>(self, name: impl Into<Cow<'static, str>>, accessor: B) -> FieldBuilder<R, U, B>
    where
        U: ?Sized + 'static,
        B: Fn(&R) -> &U + Send + Sync + 'static,
    {
        self.finish().field(name, accessor)
    }

    /// Finishes the declaration.
    ///
    /// # Errors
    ///
    /// Returns the first [`DefinitionError`] met while declaring fields.
    pub fn build(self) -> Result<Schema<R>, DefinitionError> {
        self.finish().build()
    }

    fn finish(self) -> SchemaBuilder<R> {
        let mut parent = self.parent;
        parent.fields.push(Box::new(self.entry));
        parent
    }
}

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use fm_reflect::Reflect;
use fm_reflect::info::Typed;
use fm_reflect::ops::{ReflectMut, ReflectRef, Struct};

use crate::{ConfigRegistry, MapError, MappingConfig, TypePair};

// -----------------------------------------------------------------------------
// FieldPolicy

/// What [`Mapper::map`] does with a source field whose type differs from the
/// destination field it maps to, or whose value cannot be cloned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldPolicy {
    /// Leave the destination field unchanged.
    #[default]
    Skip,
    /// Fail the whole call with [`MapError::FieldType`] or
    /// [`MapError::FieldClone`], before any write.
    Strict,
}

// -----------------------------------------------------------------------------
// Mapper

/// Copies fields between reflected structs by name.
///
/// Each `Mapper` owns its own [`ConfigRegistry`]: overrides registered on one
/// mapper are invisible to every other. All methods take `&self`, so a mapper
/// configured at startup can be shared (`&Mapper`, `Arc<Mapper>`) by many
/// threads.
///
/// # Examples
///
/// ```
/// use fm_mapper::{Mapper, MappingConfig, MapError};
/// use fm_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Employee {
///     first_name: String,
///     last_name: String,
///     salary: u32,
/// }
///
/// #[derive(Reflect, Default)]
/// struct EmployeeViewModel {
///     first_name: String,
///     last_name: String,
///     full_name: String,
/// }
///
/// let employee = Employee {
///     first_name: "John".into(),
///     last_name: "Doe".into(),
///     salary: 1000,
/// };
///
/// let mapper = Mapper::new();
/// mapper.add(
///     &employee,
///     &EmployeeViewModel::default(),
///     MappingConfig::new().ignore("first_name"),
/// );
///
/// let view: EmployeeViewModel = mapper.map_new(&employee).unwrap();
/// assert_eq!(view.first_name, "");
/// assert_eq!(view.last_name, "Doe");
///
/// let err = mapper.map(&100_i32, &mut EmployeeViewModel::default()).unwrap_err();
/// assert!(matches!(err, MapError::SourceType { .. }));
/// ```
#[derive(Debug, Default)]
pub struct Mapper {
    registry: ConfigRegistry,
    policy: FieldPolicy,
}

impl Mapper {
    /// Creates a mapper without overrides, using [`FieldPolicy::Skip`].
    #[inline]
    pub const fn new() -> Self {
        Self::with_policy(FieldPolicy::Skip)
    }

    /// Creates a mapper without overrides, using `policy`.
    #[inline]
    pub const fn with_policy(policy: FieldPolicy) -> Self {
        Self {
            registry: ConfigRegistry::new(),
            policy,
        }
    }

    /// Returns a [`MapperBuilder`].
    #[inline]
    pub fn builder() -> MapperBuilder {
        MapperBuilder::default()
    }

    #[inline]
    pub const fn policy(&self) -> FieldPolicy {
        self.policy
    }

    #[inline]
    pub const fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    /// Registers `overrides` for the types of two sample values.
    ///
    /// Samples may be values or `Box`es, both resolve to the same pair. If the
    /// pair already has overrides this is a no-op, see [`ConfigRegistry`].
    /// Field names are not checked against either type.
    pub fn add(
        &self,
        source_sample: &dyn Reflect,
        destination_sample: &dyn Reflect,
        overrides: impl Into<MappingConfig>,
    ) {
        let pair = TypePair::of_values(source_sample, destination_sample);
        self.registry.register(pair, overrides.into());
    }

    /// Registers `overrides` for source type `S` and destination type `D`.
    ///
    /// Returns `false` if the pair already had overrides.
    pub fn register<S: Typed, D: Typed>(&self, overrides: impl Into<MappingConfig>) -> bool {
        self.registry.register(TypePair::of::<S, D>(), overrides.into())
    }

    /// Returns `true` if overrides are registered for `S` to `D`.
    #[inline]
    pub fn contains<S: Typed, D: Typed>(&self) -> bool {
        self.registry.contains(&TypePair::of::<S, D>())
    }

    /// Returns the overrides registered for `pair`.
    #[inline]
    pub fn lookup(&self, pair: &TypePair) -> Option<Arc<MappingConfig>> {
        self.registry.lookup(pair)
    }

    /// Returns the number of type pairs with registered overrides.
    #[inline]
    pub fn config_len(&self) -> usize {
        self.registry.len()
    }

    /// Copies the fields of `source` into `destination`.
    ///
    /// `destination` must be a struct or a `Box` of one, and so must
    /// `source`; this is checked in that order. Then, for every destination
    /// field in declaration order:
    ///
    /// 1. an ignored field is skipped;
    /// 2. the source field is looked up by the override name, or by the
    ///    field's own name;
    /// 3. an absent source field is skipped;
    /// 4. a source field of another type is skipped, or fails the call under
    ///    [`FieldPolicy::Strict`];
    /// 5. otherwise the value is cloned whole with
    ///    [`Reflect::reflect_clone`]. A nested struct is not traversed: it
    ///    is copied with its hidden fields, or, when it cannot be cloned,
    ///    skipped (failing the call under [`FieldPolicy::Strict`]).
    ///
    /// All checks and clones happen before the first write, and the writes
    /// are [`Reflect::set`] calls with values of the field's own type. On
    /// error `destination` is unmodified. A hand-written `Reflect` impl whose
    /// `set` rejects its own type is the one exception: that field is left
    /// unchanged, logged at `debug`, and the other fields are still written.
    /// `source` and the registry are never modified.
    pub fn map(&self, source: &dyn Reflect, destination: &mut dyn Reflect) -> Result<(), MapError> {
        let destination = destination.pointee_mut();
        let destination_info = destination.reflect_type_info();
        let (ReflectMut::Struct(destination), Ok(struct_info)) =
            (destination.reflect_mut(), destination_info.as_struct())
        else {
            return Err(MapError::DestinationType {
                type_path: destination_info.type_path(),
            });
        };

        let source = source.pointee();
        let ReflectRef::Struct(source) = source.reflect_ref() else {
            return Err(MapError::SourceType {
                type_path: source.reflect_type_path(),
            });
        };

        let pair = TypePair::of_values(source, &*destination);
        let config = self.registry.lookup(&pair);

        let mut plan: Vec<(usize, Box<dyn Reflect>)> = Vec::with_capacity(struct_info.field_len());

        for (index, field) in struct_info.iter().enumerate() {
            let name = field.name();
            let source_name = match config.as_deref() {
                Some(config) => config.source_for(name),
                None => Some(name),
            };

            let Some(source_name) = source_name else {
                log::trace!("{pair}: `{name}` ignored");
                continue;
            };

            let Some(value) = source.field(source_name) else {
                log::trace!("{pair}: `{name}` has no source field `{source_name}`");
                continue;
            };

            if value.ty_id() != field.ty_id() {
                match self.policy {
                    FieldPolicy::Skip => {
                        log::debug!(
                            "{pair}: `{name}` skipped, `{}` is not assignable to `{}`",
                            value.reflect_type_path(),
                            field.type_path(),
                        );
                        continue;
                    }
                    FieldPolicy::Strict => {
                        return Err(MapError::FieldType {
                            field: name,
                            source_type: value.reflect_type_path(),
                            destination_type: field.type_path(),
                        });
                    }
                }
            }

            match value.reflect_clone() {
                Ok(value) => plan.push((index, value)),
                Err(err) => match self.policy {
                    FieldPolicy::Skip => {
                        log::debug!("{pair}: `{name}` skipped, {err}");
                    }
                    FieldPolicy::Strict => {
                        return Err(MapError::FieldClone {
                            field: name,
                            type_path: field.type_path(),
                        });
                    }
                },
            }
        }

        for (index, value) in plan {
            let Some(target) = destination.field_at_mut(index) else {
                continue;
            };
            if let Err(value) = target.set(value) {
                log::debug!(
                    "{pair}: field #{index} rejected a value of its own type `{}`",
                    value.reflect_type_path(),
                );
            }
        }

        Ok(())
    }

    /// Maps `source` into a fresh `D::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fm_mapper::Mapper;
    /// use fm_reflect::derive::Reflect;
    ///
    /// #[derive(Reflect)]
    /// struct Row { id: u64, name: String }
    ///
    /// #[derive(Reflect, Default)]
    /// struct Item { id: u64 }
    ///
    /// let row = Box::new(Row { id: 3, name: "x".into() });
    /// let item: Item = Mapper::new().map_new(&row).unwrap();
    ///
    /// assert_eq!(item.id, 3);
    /// ```
    pub fn map_new<D: Struct + Default>(&self, source: &dyn Reflect) -> Result<D, MapError> {
        let mut destination = D::default();
        self.map(source, &mut destination)?;
        Ok(destination)
    }
}

// -----------------------------------------------------------------------------
// MapperBuilder

/// Builds a [`Mapper`] with a policy and pre-registered overrides.
///
/// Overrides are registered in call order, so for a repeated type pair the
/// first one wins, as with [`Mapper::register`].
///
/// # Examples
///
/// ```
/// use fm_mapper::{FieldPolicy, Mapper, MappingConfig};
///
/// let mapper = Mapper::builder()
///     .policy(FieldPolicy::Strict)
///     .register::<u8, u16>(MappingConfig::new())
///     .build();
///
/// assert_eq!(mapper.policy(), FieldPolicy::Strict);
/// assert!(mapper.contains::<u8, u16>());
/// ```
#[derive(Debug, Default)]
pub struct MapperBuilder {
    policy: FieldPolicy,
    configs: Vec<(TypePair, MappingConfig)>,
}

impl MapperBuilder {
    #[must_use]
    pub fn policy(mut self, policy: FieldPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Queues `overrides` for source type `S` and destination type `D`.
    #[must_use]
    pub fn register<S: Typed, D: Typed>(mut self, overrides: impl Into<MappingConfig>) -> Self {
        self.configs.push((TypePair::of::<S, D>(), overrides.into()));
        self
    }

    pub fn build(self) -> Mapper {
        let mapper = Mapper::with_policy(self.policy);
        for (pair, config) in self.configs {
            mapper.registry.register(pair, config);
        }
        mapper
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;

    use fm_reflect::derive::Reflect;

    use super::{FieldPolicy, Mapper};
    use crate::{FieldConfig, MapError, MappingConfig, TypePair};

    #[derive(Reflect, Debug, Clone, PartialEq)]
    struct Employee {
        first_name: String,
        last_name: String,
        salary: u32,
    }

    #[derive(Reflect, Debug, Clone, Default, PartialEq)]
    struct EmployeeViewModel {
        first_name: String,
        last_name: String,
        full_name: String,
    }

    #[derive(Reflect, Debug, Default, PartialEq)]
    struct Payslip {
        last_name: String,
        salary: String,
    }

    #[derive(Reflect, Debug, Clone, Default, PartialEq)]
    #[reflect(clone)]
    struct Address {
        city: String,
        #[reflect(ignore)]
        geocode: u64,
    }

    #[derive(Reflect, Debug, Default, PartialEq)]
    struct Session {
        user: String,
        #[reflect(ignore)]
        token: u64,
    }

    #[derive(Reflect, Debug, Default, PartialEq)]
    struct Contact {
        name: String,
        address: Address,
        session: Session,
    }

    fn contact() -> Contact {
        Contact {
            name: String::from("Doe"),
            address: Address {
                city: String::from("Oslo"),
                geocode: 7,
            },
            session: Session {
                user: String::from("jdoe"),
                token: 42,
            },
        }
    }

    fn employee() -> Employee {
        Employee {
            first_name: String::from("John"),
            last_name: String::from("Doe"),
            salary: 1000,
        }
    }

    fn view(first_name: &str, last_name: &str, full_name: &str) -> EmployeeViewModel {
        EmployeeViewModel {
            first_name: first_name.into(),
            last_name: last_name.into(),
            full_name: full_name.into(),
        }
    }

    #[test]
    fn maps_by_name() {
        let mapper = Mapper::new();
        let mut destination = EmployeeViewModel::default();

        mapper.map(&employee(), &mut destination).unwrap();

        assert_eq!(destination, view("John", "Doe", ""));
    }

    #[test]
    fn ignore_override() {
        let mapper = Mapper::new();
        let source = employee();
        mapper.add(
            &source,
            &EmployeeViewModel::default(),
            [("first_name", FieldConfig::ignored())],
        );

        let mut destination = EmployeeViewModel::default();
        mapper.map(&source, &mut destination).unwrap();

        assert_eq!(destination, view("", "Doe", ""));
    }

    #[test]
    fn source_override() {
        let mapper = Mapper::new();
        let source = employee();
        mapper.add(
            &source,
            &EmployeeViewModel::default(),
            [("first_name", FieldConfig::from_source("last_name"))],
        );

        let mut destination = EmployeeViewModel::default();
        mapper.map(&source, &mut destination).unwrap();

        assert_eq!(destination.first_name, "Doe");
        assert_eq!(destination.last_name, "Doe");
    }

    #[test]
    fn ignore_wins_over_source() {
        let mapper = Mapper::new();
        mapper.register::<Employee, EmployeeViewModel>([(
            "full_name",
            FieldConfig {
                ignore: true,
                source: Some(String::from("first_name")),
            },
        )]);

        let destination: EmployeeViewModel = mapper.map_new(&employee()).unwrap();
        assert_eq!(destination, view("John", "Doe", ""));
    }

    #[test]
    fn source_by_value_or_pointer() {
        let mapper = Mapper::new();
        mapper.register::<Employee, EmployeeViewModel>(MappingConfig::new().rename("full_name", "last_name"));

        let by_value: EmployeeViewModel = mapper.map_new(&employee()).unwrap();
        let by_pointer: EmployeeViewModel = mapper.map_new(&Box::new(employee())).unwrap();

        assert_eq!(by_value, view("John", "Doe", "Doe"));
        assert_eq!(by_value, by_pointer);
    }

    #[test]
    fn destination_through_pointer() {
        let mut destination = Box::new(EmployeeViewModel::default());
        Mapper::new().map(&employee(), &mut destination).unwrap();

        assert_eq!(*destination, view("John", "Doe", ""));
    }

    #[test]
    fn rejects_non_struct_destination() {
        let mapper = Mapper::new();

        let mut number = 5_i32;
        let err = mapper.map(&employee(), &mut number).unwrap_err();
        assert_eq!(err, MapError::DestinationType { type_path: "i32" });
        assert_eq!(number, 5);

        let mut nested = Box::new(Box::new(EmployeeViewModel::default()));
        let err = mapper.map(&employee(), &mut nested).unwrap_err();
        assert!(matches!(err, MapError::DestinationType { .. }));
        assert_eq!(**nested, EmployeeViewModel::default());
    }

    #[test]
    fn rejects_non_struct_source() {
        let mapper = Mapper::new();
        let mut destination = view("a", "b", "c");

        let err = mapper.map(&100_i32, &mut destination).unwrap_err();
        assert_eq!(err, MapError::SourceType { type_path: "i32" });
        assert_eq!(destination, view("a", "b", "c"));
    }

    #[test]
    fn destination_checked_first() {
        let err = Mapper::new().map(&1_u8, &mut 2_u8).unwrap_err();
        assert!(matches!(err, MapError::DestinationType { .. }));
    }

    #[test]
    fn absent_fields_keep_their_value() {
        let mut destination = view("x", "y", "kept");
        Mapper::new().map(&employee(), &mut destination).unwrap();

        assert_eq!(destination, view("John", "Doe", "kept"));
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let mapper = Mapper::new();
        let source = employee();
        let destination = EmployeeViewModel::default();

        mapper.add(&source, &destination, MappingConfig::new().ignore("first_name"));
        mapper.add(&source, &destination, MappingConfig::new().ignore("last_name"));
        mapper.add(&Box::new(source.clone()), &destination, MappingConfig::new());

        assert_eq!(mapper.config_len(), 1);

        let config = mapper
            .lookup(&TypePair::of::<Employee, EmployeeViewModel>())
            .unwrap();
        assert_eq!(*config, MappingConfig::new().ignore("first_name"));

        let mapped: EmployeeViewModel = mapper.map_new(&source).unwrap();
        assert_eq!(mapped, view("", "Doe", ""));
    }

    #[test]
    fn configs_are_scoped_to_one_mapper() {
        let configured = Mapper::new();
        configured.register::<Employee, EmployeeViewModel>(MappingConfig::new().ignore("last_name"));

        let plain = Mapper::new();

        assert!(configured.contains::<Employee, EmployeeViewModel>());
        assert!(!plain.contains::<Employee, EmployeeViewModel>());
        assert!(!configured.contains::<EmployeeViewModel, Employee>());

        let mapped: EmployeeViewModel = plain.map_new(&employee()).unwrap();
        assert_eq!(mapped, view("John", "Doe", ""));
    }

    #[test]
    fn mapping_is_idempotent() {
        let mapper = Mapper::new();
        mapper.register::<Employee, EmployeeViewModel>(MappingConfig::new().rename("full_name", "first_name"));

        let source = employee();
        let mut destination = EmployeeViewModel::default();

        mapper.map(&source, &mut destination).unwrap();
        let first = destination.clone();
        mapper.map(&source, &mut destination).unwrap();

        assert_eq!(first, destination);
        assert_eq!(source, employee());
    }

    #[test]
    fn incompatible_types_are_skipped() {
        let mut payslip = Payslip::default();
        Mapper::new().map(&employee(), &mut payslip).unwrap();

        assert_eq!(payslip.last_name, "Doe");
        assert_eq!(payslip.salary, "");
    }

    #[test]
    fn strict_policy_fails_before_writing() {
        let mapper = Mapper::with_policy(FieldPolicy::Strict);
        let mut payslip = Payslip::default();

        let err = mapper.map(&employee(), &mut payslip).unwrap_err();

        assert_eq!(
            err,
            MapError::FieldType {
                field: "salary",
                source_type: "u32",
                destination_type: "alloc::string::String",
            }
        );
        assert_eq!(payslip, Payslip::default());
    }

    #[test]
    fn strict_policy_accepts_ignored_mismatch() {
        let mapper = Mapper::builder()
            .policy(FieldPolicy::Strict)
            .register::<Employee, Payslip>(MappingConfig::new().ignore("salary"))
            .build();

        let payslip: Payslip = mapper.map_new(&employee()).unwrap();
        assert_eq!(payslip.last_name, "Doe");
    }

    #[test]
    fn shared_between_threads() {
        let mapper = Arc::new(Mapper::new());
        mapper.register::<Employee, EmployeeViewModel>(MappingConfig::new().rename("full_name", "last_name"));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let mapper = Arc::clone(&mapper);
                std::thread::spawn(move || mapper.map_new::<EmployeeViewModel>(&employee()))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), view("John", "Doe", "Doe"));
        }
    }

    #[test]
    fn nested_struct_copied_whole() {
        let copy: Contact = Mapper::new().map_new(&contact()).unwrap();

        assert_eq!(copy.name, "Doe");
        assert_eq!(copy.address, contact().address);
        assert_eq!(copy.address.geocode, 7);
    }

    #[test]
    fn uncloneable_nested_struct_is_skipped() {
        let mut destination = Contact {
            session: Session {
                user: String::from("old"),
                token: 1,
            },
            ..Contact::default()
        };
        Mapper::new().map(&contact(), &mut destination).unwrap();

        assert_eq!(destination.name, "Doe");
        assert_eq!(destination.address.city, "Oslo");
        assert_eq!(destination.session.user, "old");
        assert_eq!(destination.session.token, 1);
    }

    #[test]
    fn strict_policy_rejects_uncloneable_field_before_writing() {
        let mapper = Mapper::with_policy(FieldPolicy::Strict);
        let mut destination = Contact::default();

        let err = mapper.map(&contact(), &mut destination).unwrap_err();

        assert!(matches!(err, MapError::FieldClone { field: "session", .. }));
        assert_eq!(destination, Contact::default());
    }
}

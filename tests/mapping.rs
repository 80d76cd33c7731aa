use std::sync::Arc;
use std::thread;

use fieldmap::prelude::*;
use fieldmap::TypePair;

#[derive(Reflect, Debug, Clone, Default, PartialEq)]
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
#[reflect(type_path = "hr::Badge")]
struct Badge {
    last_name: String,
    salary: u64,
    tags: Vec<String>,
    manager: Option<String>,
}

#[derive(Reflect, Debug, Default, PartialEq)]
struct Envelope<T> {
    id: u32,
    payload: T,
}

fn john() -> Employee {
    Employee {
        first_name: String::from("John"),
        last_name: String::from("Doe"),
        salary: 1000,
    }
}

#[test]
fn same_named_fields_are_copied() {
    let mut view = EmployeeViewModel::default();
    Mapper::new().map(&john(), &mut view).unwrap();

    assert_eq!(view.first_name, "John");
    assert_eq!(view.last_name, "Doe");
    assert_eq!(view.full_name, "");
}

#[test]
fn overrides_registered_from_samples() {
    let mapper = Mapper::new();
    let sample = john();

    mapper.add(
        &sample,
        &EmployeeViewModel::default(),
        MappingConfig::new()
            .ignore("first_name")
            .rename("full_name", "last_name"),
    );

    let view: EmployeeViewModel = mapper.map_new(&sample).unwrap();
    assert_eq!(view.first_name, "");
    assert_eq!(view.last_name, "Doe");
    assert_eq!(view.full_name, "Doe");
}

#[test]
fn overrides_loaded_from_json() {
    let config: MappingConfig = serde_json::from_str(
        r#"{
            "first_name": { "ignore": true, "source": "last_name" },
            "full_name": { "source": "first_name" }
        }"#,
    )
    .unwrap();

    let mapper = Mapper::new();
    mapper.register::<Employee, EmployeeViewModel>(config);

    let view: EmployeeViewModel = mapper.map_new(&john()).unwrap();
    assert_eq!(view, EmployeeViewModel {
        first_name: String::new(),
        last_name: String::from("Doe"),
        full_name: String::from("John"),
    });
}

#[test]
fn overrides_loaded_from_ron() {
    let config: MappingConfig =
        ron::from_str(r#"{ "first_name": (source: Some("last_name")) }"#).unwrap();

    let mapper = Mapper::new();
    mapper.register::<Employee, EmployeeViewModel>(config);

    let view: EmployeeViewModel = mapper.map_new(&john()).unwrap();
    assert_eq!(view.first_name, "Doe");
}

#[test]
fn first_registration_wins() {
    let mapper = Mapper::new();

    assert!(mapper.register::<Employee, EmployeeViewModel>(MappingConfig::new().ignore("last_name")));
    assert!(!mapper.register::<Employee, EmployeeViewModel>(MappingConfig::new().ignore("first_name")));
    mapper.add(&Box::new(john()), &Box::new(EmployeeViewModel::default()), MappingConfig::new());

    assert_eq!(mapper.config_len(), 1);

    let view: EmployeeViewModel = mapper.map_new(&john()).unwrap();
    assert_eq!(view.first_name, "John");
    assert_eq!(view.last_name, "");
}

#[test]
fn boxes_are_looked_through() {
    let mapper = Mapper::new();
    mapper.register::<Employee, EmployeeViewModel>(MappingConfig::new().rename("full_name", "first_name"));

    let mut view = Box::new(EmployeeViewModel::default());
    mapper.map(&Box::new(john()), &mut view).unwrap();

    assert_eq!(view.full_name, "John");
    assert!(mapper.lookup(&TypePair::of::<Box<Employee>, Box<EmployeeViewModel>>()).is_some());
}

#[test]
fn shape_errors_leave_destination_untouched() {
    let mapper = Mapper::new();

    let mut view = EmployeeViewModel::default();
    let err = mapper.map(&100_i32, &mut view).unwrap_err();
    assert_eq!(err, MapError::SourceType { type_path: "i32" });
    assert_eq!(view, EmployeeViewModel::default());

    let mut count = 5_i32;
    let err = mapper.map(&john(), &mut count).unwrap_err();
    assert_eq!(err, MapError::DestinationType { type_path: "i32" });
    assert_eq!(count, 5);

    let mut name = String::from("x");
    let err = mapper.map(&100_i32, &mut name).unwrap_err();
    assert!(matches!(err, MapError::DestinationType { .. }));
    assert_eq!(
        err.to_string(),
        "destination must be a pointer to a struct, found `alloc::string::String`"
    );
}

#[test]
fn mismatched_types_depend_on_policy() {
    let mut badge = Badge {
        salary: 7,
        ..Badge::default()
    };
    Mapper::new().map(&john(), &mut badge).unwrap();

    assert_eq!(badge.last_name, "Doe");
    assert_eq!(badge.salary, 7);

    let strict = Mapper::with_policy(FieldPolicy::Strict);
    let mut badge = Badge::default();
    let err = strict.map(&john(), &mut badge).unwrap_err();

    assert_eq!(
        err.to_string(),
        "field `salary` cannot be assigned from `u32` to `u64`"
    );
    assert_eq!(badge, Badge::default());
}

#[test]
fn container_fields_are_cloned() {
    let source = Badge {
        last_name: String::from("Doe"),
        salary: 10,
        tags: vec![String::from("a"), String::from("b")],
        manager: Some(String::from("Ann")),
    };

    let copy: Badge = Mapper::new().map_new(&source).unwrap();
    assert_eq!(copy, source);
}

#[test]
fn generic_structs() {
    let source = Envelope {
        id: 9,
        payload: john(),
    };

    let copy: Envelope<Employee> = Mapper::new().map_new(&source).unwrap();
    assert_eq!(copy.id, 9);
    assert_eq!(copy.payload, john());

    let other: Envelope<String> = Mapper::new().map_new(&source).unwrap();
    assert_eq!(other.id, 9);
    assert_eq!(other.payload, "");
}

#[test]
fn concurrent_mapping() {
    let mapper = Arc::new(
        Mapper::builder()
            .register::<Employee, EmployeeViewModel>(MappingConfig::new().rename("full_name", "last_name"))
            .build(),
    );

    let handles: Vec<_> = (0..8_u32)
        .map(|salary| {
            let mapper = Arc::clone(&mapper);
            thread::spawn(move || {
                let source = Employee { salary, ..john() };
                mapper.map_new::<EmployeeViewModel>(&source)
            })
        })
        .collect();

    for handle in handles {
        let view = handle.join().unwrap().unwrap();
        assert_eq!(view.full_name, "Doe");
    }
}

#[derive(Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(clone)]
struct Inner {
    a: u32,
    #[reflect(ignore)]
    hidden: u32,
}

#[derive(Reflect, Debug, Default, PartialEq)]
struct Outer {
    inner: Inner,
}

#[test]
fn nested_fields_of_same_type_are_copied_whole() {
    let source = Outer {
        inner: Inner { a: 1, hidden: 7 },
    };

    let copy: Outer = Mapper::new().map_new(&source).unwrap();

    assert_eq!(copy.inner.a, 1);
    assert_eq!(copy.inner.hidden, 7);
}

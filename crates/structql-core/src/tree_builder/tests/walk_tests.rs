use crate::walk;
use crate::Selectable;
use crate::ShapeNode;
use crate::TreeBuildError;

selectable_struct!(Nested {
    nested_field_one: String,
    nested_field_two: Option<String>,
});

selectable_struct!(Model {
    field_one: String,
    internal: String => "-",
    nested_field: Vec<Nested> => "keep",
});

selectable_struct!(Operation {
    test_query: Option<Box<Model>> => "testQuery(id:$id<ID!>)",
});

selectable_struct!(Cycle {
    children: Vec<Cycle>,
});

#[derive(Debug, PartialEq)]
enum Event {
    Enter(&'static str, &'static str),
    Exit,
}

fn record_events<T: Selectable>() -> Result<Vec<Event>, TreeBuildError> {
    let mut events = vec![];
    walk(T::shape(), &mut |node: Option<&ShapeNode>| {
        events.push(match node {
            Some(node) => Event::Enter(node.name, node.tag),
            None => Event::Exit,
        });
        Ok(())
    })?;
    Ok(events)
}

#[test]
fn walk_visits_depth_first_with_exit_sentinels() {
    let events = record_events::<Operation>().unwrap();

    assert_eq!(events, vec![
        Event::Enter("Operation", ""),
        Event::Enter("test_query", "testQuery(id:$id<ID!>)"),
        Event::Enter("field_one", ""),
        Event::Exit,
        Event::Enter("nested_field", "keep"),
        Event::Enter("nested_field_one", ""),
        Event::Exit,
        Event::Enter("nested_field_two", ""),
        Event::Exit,
        Event::Exit,
        Event::Exit,
        Event::Exit,
    ]);
}

#[test]
fn walk_skips_fields_tagged_with_dash() {
    let events = record_events::<Model>().unwrap();

    assert!(!events.contains(&Event::Enter("internal", "-")));
}

#[test]
fn walk_dereferences_a_wrapped_root() {
    let events = record_events::<Vec<Box<Nested>>>().unwrap();

    assert_eq!(events.first(), Some(&Event::Enter("Nested", "")));
    assert_eq!(events.len(), 6);
}

#[test]
fn walk_rejects_non_struct_root_before_visiting() {
    let mut visited = false;
    let result = walk(<Option<String> as Selectable>::shape(), &mut |_| {
        visited = true;
        Ok(())
    });

    assert!(matches!(
        result,
        Err(TreeBuildError::NotAStruct { kind: "leaf", .. }),
    ));
    assert!(!visited);
}

#[test]
fn walk_rejects_recursive_types() {
    let result = record_events::<Cycle>();

    match result {
        Err(TreeBuildError::RecursiveType { field_name, .. }) => {
            assert_eq!(field_name, "children");
        },
        other => panic!("Expected RecursiveType, got {other:?}"),
    }
}

#[test]
fn walk_stops_on_first_visitor_error() {
    let mut entered = 0;
    let result = walk(Operation::shape(), &mut |node: Option<&ShapeNode>| {
        if let Some(node) = node {
            entered += 1;
            if node.name == "field_one" {
                return Err(TreeBuildError::EmptyTree { type_name: "stop" });
            }
        }
        Ok(())
    });

    assert!(result.is_err());
    assert_eq!(entered, 3);
}

use super::*;

fn names(def: &ParamDefinition) -> Vec<&str> {
    def.fields.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn field_lookup() {
    let def = ParamDefinition::new(
        "TEST_ST",
        vec![
            FieldDescriptor::new("a", FieldType::U8),
            FieldDescriptor::new("b", FieldType::F32),
        ],
    );
    assert_eq!(def.field("b").map(|f| f.field_type), Some(FieldType::F32));
    assert!(def.field("c").is_none());
}

#[test]
fn uniquify_leaves_unique_names() {
    let mut def = ParamDefinition::new(
        "TEST_ST",
        vec![
            FieldDescriptor::new("a", FieldType::U8),
            FieldDescriptor::new("b", FieldType::U8),
        ],
    );
    assert_eq!(def.uniquify_field_names(), 0);
    assert_eq!(names(&def), ["a", "b"]);
}

#[test]
fn uniquify_numbers_repeats() {
    let mut def = ParamDefinition::new(
        "TEST_ST",
        vec![
            FieldDescriptor::bits("pad", FieldType::Dummy8, 4),
            FieldDescriptor::new("id", FieldType::S32),
            FieldDescriptor::bits("pad", FieldType::Dummy8, 4),
            FieldDescriptor::array("pad", FieldType::Dummy8, 2),
        ],
    );
    assert_eq!(def.uniquify_field_names(), 3);
    assert_eq!(names(&def), ["pad_0", "id", "pad_1", "pad_2"]);
}

use arcstr::ArcStr;
use bencher::{Bencher, benchmark_group, benchmark_main};
use juniper_introspection::{
    IntrospectionFormat, SchemaBuilder, SchemaType, Type,
    meta::{Field, InterfaceMeta, ObjectMeta},
};

/// Schema with 50 interfaces, each implemented by 20 of 1000 objects.
fn wide_schema() -> SchemaType {
    let mut builder = SchemaBuilder::new("Query");
    let id = Type::NonNullNamed(arcstr::literal!("ID"));
    let fields = [Field::new(arcstr::literal!("id"), id)];

    let interfaces = (0..50)
        .map(|i| Type::Named(ArcStr::from(format!("Interface{i}"))))
        .collect::<Vec<_>>();
    for i in interfaces.iter() {
        builder
            .register(InterfaceMeta::new(i.innermost_name().clone(), &fields).into_meta())
            .unwrap();
    }
    for o in 0..1000 {
        builder
            .register(
                ObjectMeta::new(ArcStr::from(format!("Object{o}")), &fields)
                    .interfaces(&interfaces[o % 50..=o % 50])
                    .into_meta(),
            )
            .unwrap();
    }
    builder
        .register(ObjectMeta::new(arcstr::literal!("Query"), &fields).into_meta())
        .unwrap();

    builder.finish().unwrap()
}

fn possible_types_lookup(b: &mut Bencher) {
    let schema = wide_schema();
    let interface = schema.type_by_name("Interface42").unwrap();

    b.iter(|| interface.possible_types(&schema).map(|t| t.len()));
}

fn introspection_query(b: &mut Bencher) {
    let schema = wide_schema();

    b.iter(|| schema.introspect(IntrospectionFormat::All));
}

benchmark_group!(queries, possible_types_lookup, introspection_query);
benchmark_main!(queries);

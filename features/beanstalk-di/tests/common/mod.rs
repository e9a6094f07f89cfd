#![allow(dead_code)]

use beanstalk_di::{BeanRef, DynError, FieldTable, InstanceFactory, TypeRegistry, Wireable};

#[derive(Debug, Default)]
pub struct People {
    pub user_name: String,
    pub age: i32,
    pub married: bool,
    pub partner: Option<BeanRef>,
}

impl Wireable for People {
    fn fields(fields: &mut FieldTable<Self>) {
        fields
            .field("user_name", |p, v| p.user_name = v)
            .field("age", |p, v| p.age = v)
            .field("married", |p, v| p.married = v)
            .field("partner", |p, v| p.partner = v);
    }
}

#[derive(Debug, Default)]
pub struct Company {
    pub name: String,
    pub founded: i16,
    pub branches: i8,
    pub employees: i64,
    pub rating: f32,
    pub revenue: f64,
    pub grade: char,
    pub ceo: Option<BeanRef>,
    pub cto: Option<BeanRef>,
}

impl Wireable for Company {
    fn fields(fields: &mut FieldTable<Self>) {
        fields
            .field("name", |c, v| c.name = v)
            .field("founded", |c, v| c.founded = v)
            .field("branches", |c, v| c.branches = v)
            .field("employees", |c, v| c.employees = v)
            .field("rating", |c, v| c.rating = v)
            .field("revenue", |c, v| c.revenue = v)
            .field("grade", |c, v| c.grade = v)
            .field("ceo", |c, v| c.ceo = v)
            .field("cto", |c, v| c.cto = v);
    }
}

/// Type whose construction always fails
pub struct Broken;

impl Wireable for Broken {
    fn fields(_: &mut FieldTable<Self>) {}
}

pub struct BrokenFactory;

impl InstanceFactory for BrokenFactory {
    type Provides = Broken;

    fn construct(&self) -> Result<Broken, DynError> {
        Err("no default instance".into())
    }
}

pub fn registry() -> TypeRegistry {
    TypeRegistry::new()
        .register::<People>("demo.People")
        .register::<Company>("demo.Company")
        .register_factory("demo.Broken", BrokenFactory)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn partner_of(bean: &BeanRef) -> Option<BeanRef> {
    bean.read::<People, _>(|p| p.partner.clone()).flatten()
}

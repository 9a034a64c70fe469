use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use structql::Fieldset;
use structql::OperationKind;
use structql::Selectable;
use structql::TreeCache;

#[derive(Selectable)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Selectable)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[structql("@include($withAddresses)")]
    pub addresses: Vec<Address>,
    pub created_at: String,
    pub modified_at: String,
}

#[derive(Selectable)]
pub struct ListAccounts {
    #[structql("accounts(first:$first<Int>,after:$after<String>),@alias(page)")]
    pub accounts: Vec<Account>,
}

// ─── Group 1: Marshaling ──────────────────────────────────

fn marshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("marshal");

    group.bench_function("cached_tree", |b| {
        b.iter(|| black_box(structql::marshal_query::<ListAccounts>(None)))
    });

    let fields = Fieldset::from_url_query_param("id,email,addresses.city");
    group.bench_function("cached_tree_with_fieldset", |b| {
        b.iter(|| black_box(structql::marshal_query::<ListAccounts>(fields.as_ref())))
    });

    group.bench_function("cold_tree", |b| {
        b.iter(|| {
            let cache = TreeCache::new();
            black_box(structql::marshal_operation_with_cache::<ListAccounts>(
                &cache,
                OperationKind::Query,
                None,
            ))
        })
    });

    group.finish();
}

// ─── Group 2: Parsing inputs ──────────────────────────────

fn parse_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_inputs");

    group.bench_function("tag", |b| {
        b.iter(|| {
            black_box(structql::parse_tag(
                "accounts(first:$first<Int>,after:$after<String>),@alias(page),@skip($hide)",
            ))
        })
    });

    group.bench_function("url_query_param", |b| {
        b.iter(|| {
            black_box(Fieldset::from_url_query_param(
                "id,email,displayName,addresses.street,addresses.city,addresses.country",
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, marshal, parse_inputs);
criterion_main!(benches);

use std::hint::black_box;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use credits_core::model::{RoleDefaults, TextPosition};
use credits_core::{
    CreditsDocument, NameOverride, OverrideTable, Resolver, RoleOverride, RoleSimple, SectionOverride, SectionSimple,
    SimpleText, StyleDefaults,
};

fn make_sections(sections: usize, roles: usize, names: usize) -> Vec<SectionSimple> {
    (0..sections)
        .map(|s| {
            let roles = (0..roles)
                .map(|r| {
                    let played_by = (0..names).map(|n| SimpleText::plain(format!("person{s}_{r}_{n}"))).collect();
                    RoleSimple::new(SimpleText::plain(format!("role{r}")), r % 2 == 0, played_by)
                })
                .collect();
            SectionSimple::new(SimpleText::plain(format!("section{s}")), roles)
        })
        .collect()
}

fn make_overrides(sections: usize, roles: usize) -> OverrideTable {
    let top = RoleDefaults { role_position: TextPosition::Top, ..RoleDefaults::default() };
    let mut role_overrides = Vec::new();
    let mut name_overrides = Vec::new();
    for s in 0..sections {
        for r in (0..roles).step_by(3) {
            role_overrides.push(RoleOverride::new(format!("section{s}"), format!("role{r}"), top.clone()));
            name_overrides.push(NameOverride::new(
                format!("section{s}"),
                format!("role{r}"),
                format!("person{s}_{r}_0"),
                StyleDefaults::name_text(),
            ));
        }
    }
    OverrideTable::new(SectionOverride::default(), false, role_overrides, name_overrides).unwrap_or_default()
}

fn make_document(sections: usize, roles: usize) -> String {
    let mut buf = String::with_capacity(sections * roles * 80);
    for s in 0..sections {
        buf.push_str(&format!("[[sections]]\ntitle = {{ text = \"section{s}\" }}\n"));
        for r in 0..roles {
            buf.push_str(&format!(
                "[[sections.roles]]\nrole = {{ text = \"role{r}\" }}\nplayed_by = [{{ text = \"a{r}\" }}, {{ text = \"b{r}\" }}]\n"
            ));
        }
    }
    buf
}

fn bench_resolve(c: &mut Criterion) {
    let sections = make_sections(50, 40, 5);
    let overrides = make_overrides(50, 40);
    let defaults = StyleDefaults::default();

    let mut group = c.benchmark_group("resolve");
    group.sample_size(10);
    group.bench_function("50 sections x 40 roles x 5 names", |b| {
        let resolver = Resolver::new(&defaults, &overrides);
        b.iter(|| resolver.resolve_all(black_box(&sections)))
    });
    group.bench_function("build override table", |b| {
        b.iter_batched(
            || (make_overrides(50, 40).role_overrides().to_vec(), make_overrides(50, 40).name_overrides().to_vec()),
            |(roles, names)| OverrideTable::new(SectionOverride::default(), false, roles, names),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let src = make_document(50, 40);
    let mut group = c.benchmark_group("parse");
    group.sample_size(10);
    group.bench_function("document 50 sections", |b| {
        b.iter(|| CreditsDocument::parse(black_box(&src)))
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_parse);
criterion_main!(benches);

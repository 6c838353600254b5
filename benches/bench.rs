// Criterion benchmarks for HeartMatch discovery

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heartmatch::core::{evaluate, normalize, sample_featured};
use heartmatch::models::{FilterCriteria, FilterForm, Gender, GenderChoice, Profile};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CITIES: &[&str] = &["New York, USA", "Chicago, USA", "Pune, India", "London, UK"];
const RELIGIONS: &[&str] = &["Christian", "Hindu", "Buddhist", "Muslim"];
const EDUCATION: &[&str] = &["Bachelor in Design", "MSc in Physics", "MBA", "PhD in Biology"];

fn create_profile(id: usize) -> Profile {
    Profile {
        id: id.to_string(),
        user_id: format!("user{}", id),
        name: format!("User {}", id),
        age: 21 + (id % 30) as u8,
        gender: if id % 2 == 0 { Gender::Female } else { Gender::Male },
        location: CITIES[id % CITIES.len()].to_string(),
        bio: String::new(),
        occupation: "Engineer".to_string(),
        education: EDUCATION[id % EDUCATION.len()].to_string(),
        religion: (id % 5 != 0).then(|| RELIGIONS[id % RELIGIONS.len()].to_string()),
        height: (id % 7 != 0).then_some(150 + (id % 40) as u16),
        photos: vec![],
        interests: vec![],
        is_verified: id % 3 == 0,
        created_at: None,
        updated_at: None,
    }
}

fn create_criteria() -> FilterCriteria {
    FilterCriteria {
        gender: Some(Gender::Female),
        age_min: Some(25),
        age_max: Some(40),
        location: Some("usa".to_string()),
        religion: Some("hindu".to_string()),
        height_min: Some(155),
        education: ["bachelors".to_string(), "masters".to_string()].into(),
        ..Default::default()
    }
}

fn bench_evaluate(c: &mut Criterion) {
    let criteria = create_criteria();
    let mut group = c.benchmark_group("evaluate");

    for count in [10, 100, 1000, 10_000].iter() {
        let profiles: Vec<Profile> = (0..*count).map(create_profile).collect();

        group.bench_with_input(BenchmarkId::new("all_dimensions", count), count, |b, _| {
            b.iter(|| evaluate(black_box(&profiles), black_box(&criteria)));
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let form = FilterForm {
        gender: GenderChoice::Female,
        age_max: 35,
        location: "USA".to_string(),
        education: ["bachelors".to_string()].into(),
        ..Default::default()
    };

    c.bench_function("normalize_form", |b| {
        b.iter(|| normalize(black_box(&form)));
    });
}

fn bench_sampling(c: &mut Criterion) {
    let profiles: Vec<Profile> = (0..1000).map(create_profile).collect();

    c.bench_function("sample_featured_1000", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| sample_featured(black_box(&profiles), 4, &mut rng).len());
    });
}

criterion_group!(benches, bench_evaluate, bench_normalize, bench_sampling);

criterion_main!(benches);

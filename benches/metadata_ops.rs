use criterion::{criterion_group, criterion_main, Criterion};
use picmeta::{Dict, MetaValue, Metadata, Namespace};
use std::hint::black_box;

fn populated_properties() -> Dict {
    let mut tiff = Dict::new();
    tiff.insert("Orientation".to_string(), MetaValue::Integer(1));
    tiff.insert("ImageWidth".to_string(), MetaValue::Integer(4000));
    tiff.insert("ImageLength".to_string(), MetaValue::Integer(3000));
    tiff.insert("Make".to_string(), MetaValue::Text("Canon".to_string()));
    tiff.insert("XResolution".to_string(), MetaValue::Float(72.0));
    tiff.insert("YResolution".to_string(), MetaValue::Float(72.0));

    let mut exif = Dict::new();
    exif.insert("PixelXDimension".to_string(), MetaValue::Integer(4000));
    exif.insert("PixelYDimension".to_string(), MetaValue::Integer(3000));
    exif.insert("FNumber".to_string(), MetaValue::Float(2.8));
    for i in 0..20 {
        exif.insert(format!("Tag{}", 50000 + i), MetaValue::Integer(i));
    }

    let mut gps = Dict::new();
    gps.insert("Latitude".to_string(), MetaValue::Float(51.5));
    gps.insert("Longitude".to_string(), MetaValue::Float(-0.12));

    let mut properties = Dict::new();
    properties.insert("PixelWidth".to_string(), MetaValue::Integer(4000));
    properties.insert("PixelHeight".to_string(), MetaValue::Integer(3000));
    properties.insert("{TIFF}".to_string(), MetaValue::Dict(tiff));
    properties.insert("{Exif}".to_string(), MetaValue::Dict(exif));
    properties.insert("{GPS}".to_string(), MetaValue::Dict(gps));
    properties
}

fn bench_from_properties(c: &mut Criterion) {
    let properties = populated_properties();
    c.bench_function("from_properties", |b| {
        b.iter(|| Metadata::from_properties(black_box(properties.clone())));
    });
}

fn bench_derived_fields(c: &mut Criterion) {
    let meta = Metadata::from_properties(populated_properties());
    c.bench_function("derived_fields", |b| {
        b.iter(|| {
            let m = black_box(&meta);
            (
                m.pixel_width(),
                m.pixel_height(),
                m.dpi_width(),
                m.dpi_height(),
                m.orientation(),
            )
        });
    });
}

fn bench_diff_clean(c: &mut Criterion) {
    let meta = Metadata::from_properties(populated_properties());
    c.bench_function("diff_clean", |b| {
        b.iter(|| black_box(&meta).diff());
    });
}

fn bench_diff_dirty(c: &mut Criterion) {
    let mut meta = Metadata::from_properties(populated_properties());
    meta.set_orientation(6).unwrap();
    meta.block_mut(Namespace::Gps)
        .unwrap()
        .set("Altitude", 12.0)
        .unwrap();
    c.bench_function("diff_dirty", |b| {
        b.iter(|| black_box(&meta).diff());
    });
}

fn bench_set_orientation(c: &mut Criterion) {
    c.bench_function("set_orientation", |b| {
        b.iter(|| {
            let mut meta = Metadata::from_properties(black_box(Dict::new()));
            meta.set_orientation(black_box(6)).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_from_properties,
    bench_derived_fields,
    bench_diff_clean,
    bench_diff_dirty,
    bench_set_orientation
);
criterion_main!(benches);

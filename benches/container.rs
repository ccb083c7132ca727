#![allow(dead_code)]

use std::sync::Arc;

use bindery::{map_module, Container, Entry, Injectable, Key, Module, Options};
use criterion::{criterion_group, criterion_main, Criterion};
use tokio::runtime::Builder;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("configure", |b| {
        b.to_async(Builder::new_current_thread().build().unwrap()).iter(|| async {
            let container = Container::new(vec![Arc::new(map_module! {
                "a" => Entry::instance(1_i32),
                "b" => Entry::instance(2_i32),
                "c" => Entry::instance(3_i32),
            }) as Arc<dyn Module>]);
            container.configure().await.unwrap();
            container
        });
    })
    .bench_function("create_shallow", |b| {
        struct A {
            a: Arc<i32>,
            b: Arc<i32>,
        }

        impl Injectable for A {
            fn requirements() -> Vec<Key> {
                vec![Key::name("a"), Key::name("b")]
            }

            fn assemble(options: &Options) -> Result<Self, anyhow::Error> {
                Ok(Self {
                    a: options.get_name("a")?,
                    b: options.get_name("b")?,
                })
            }
        }

        let container = {
            let runtime = Builder::new_current_thread().build().unwrap();
            runtime.block_on(async {
                let container = Container::new(vec![Arc::new(map_module! {
                    "a" => Entry::instance(1_i32),
                    "b" => Entry::instance(2_i32),
                }) as Arc<dyn Module>]);
                container.configure().await.unwrap();
                container
            })
        };
        b.to_async(Builder::new_current_thread().build().unwrap()).iter(|| {
            let container = container.clone();
            async move { container.create::<A>().await.unwrap() }
        });
    })
    .bench_function("create_nested", |b| {
        struct A(Arc<B>);
        struct B(Arc<C>);
        struct C(Arc<D>);
        struct D;

        impl Injectable for A {
            fn requirements() -> Vec<Key> {
                vec![Key::of::<B>()]
            }

            fn assemble(options: &Options) -> Result<Self, anyhow::Error> {
                Ok(Self(options.get(&Key::of::<B>())?))
            }
        }

        impl Injectable for B {
            fn requirements() -> Vec<Key> {
                vec![Key::of::<C>()]
            }

            fn assemble(options: &Options) -> Result<Self, anyhow::Error> {
                Ok(Self(options.get(&Key::of::<C>())?))
            }
        }

        impl Injectable for C {
            fn requirements() -> Vec<Key> {
                vec![Key::of::<D>()]
            }

            fn assemble(options: &Options) -> Result<Self, anyhow::Error> {
                Ok(Self(options.get(&Key::of::<D>())?))
            }
        }

        impl Injectable for D {
            fn assemble(_options: &Options) -> Result<Self, anyhow::Error> {
                Ok(Self)
            }
        }

        let container = {
            let runtime = Builder::new_current_thread().build().unwrap();
            runtime.block_on(async {
                let container = Container::new(vec![Arc::new(map_module! {
                    Key::of::<B>() => Entry::constructor::<B>(),
                    Key::of::<C>() => Entry::constructor::<C>(),
                    Key::of::<D>() => Entry::constructor::<D>(),
                }) as Arc<dyn Module>]);
                container.configure().await.unwrap();
                container
            })
        };
        b.to_async(Builder::new_current_thread().build().unwrap()).iter(|| {
            let container = container.clone();
            async move { container.create::<A>().await.unwrap() }
        });
    })
    .bench_function("get_single", |b| {
        let container = {
            let runtime = Builder::new_current_thread().build().unwrap();
            runtime.block_on(async {
                let container = Container::new(vec![Arc::new(map_module! {
                    "a" => Entry::instance(1_i32),
                }) as Arc<dyn Module>]);
                container.configure().await.unwrap();
                container
            })
        };
        b.to_async(Builder::new_current_thread().build().unwrap()).iter(|| {
            let container = container.clone();
            async move { container.get::<i32>(&Key::name("a")).await.unwrap() }
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

use std::time::{Duration, Instant};

use algebra::{category, either::Either, iso, Optional};
use anyhow::Result;
use ctfp_exercises::{
    coproduct,
    functions::{memoized_slow_factorial, BOOL_FUNCTIONS},
    partial::{safe_reciprocal, safe_root, safe_root_reciprocal},
    readers::read_float,
    shape::Shape,
    words::{negate, process},
};
use tracing::info;

use crate::cli::{KleisliArgs, MemoArgs, ReaderArgs, WriterArgs};

pub(crate) fn handle_compose() -> Result<()> {
    let add_one = |x: i32| x + 1;
    let double = |x: i32| x * 2;

    let after = category::compose(add_one, double);
    let then = category::comp(add_one, double);
    println!("compose(add_one, double)(5) = {}", after(5));
    println!("comp(add_one, double)(5) = {}", then(5));

    let left = category::compose(category::iden::<i32>, add_one);
    let right = category::compose(add_one, category::iden::<i32>);
    println!(
        "id . add_one = {}, add_one . id = {}, add_one = {}",
        left(5),
        right(5),
        add_one(5)
    );

    for (name, f) in BOOL_FUNCTIONS {
        println!("{name}: false -> {}, true -> {}", f(false), f(true));
    }
    Ok(())
}

pub(crate) fn handle_memo(args: MemoArgs) -> Result<()> {
    let MemoArgs { arg, delay_ms } = args;
    let mut memo = memoized_slow_factorial(Duration::from_millis(delay_ms));

    info!(%arg, %delay_ms, "timing memoized factorial");

    for attempt in ["first", "second"] {
        let started = Instant::now();
        let result = memo.call(arg)?;
        println!(
            "{attempt} call: {arg}! = {} in {:?}",
            show(result),
            started.elapsed()
        );
    }

    let stats = memo.stats();
    println!(
        "hits = {}, misses = {}, entries = {}",
        stats.hits, stats.misses, stats.entries
    );
    Ok(())
}

pub(crate) fn handle_kleisli(args: KleisliArgs) -> Result<()> {
    let KleisliArgs { x } = args;
    println!("safe_reciprocal({x}) = {}", show(safe_reciprocal(x)));
    println!("safe_root({x}) = {}", show(safe_root(x)));
    println!("safe_root_reciprocal({x}) = {}", show(safe_root_reciprocal()(x)));
    Ok(())
}

pub(crate) fn handle_writer(args: WriterArgs) -> Result<()> {
    let (words, log) = process()(args.text).into_parts();
    println!("words = {words:?}");
    println!("log = {log:?}");

    let (negated, log) = negate(true).into_parts();
    println!("negate(true) = {negated}, log = {log:?}");
    Ok(())
}

pub(crate) fn handle_coproduct() -> Result<()> {
    for e in [Either::Left(7), Either::Right(true), Either::Right(false)] {
        println!("m({e:?}) = {}", coproduct::m(e));
    }

    let iso = iso::maybe_either::<i32>();
    for o in [Optional::valid(3), Optional::invalid()] {
        let e = iso.forward(o);
        println!("{o:?} <-> {e:?} <-> {:?}", iso.backward(e.clone()));
    }
    Ok(())
}

pub(crate) fn handle_shapes() -> Result<()> {
    for shape in [
        Shape::Circle(1.0),
        Shape::Rect(2.0, 3.0),
        Shape::Square(4.0),
    ] {
        println!(
            "{shape:?}: area = {:.3}, circ = {:.3}",
            shape.area(),
            shape.circ()
        );
    }
    Ok(())
}

pub(crate) fn handle_reader(args: ReaderArgs) -> Result<()> {
    let result = read_float().run(args.text.clone());
    println!("read_float({:?}) = {}", args.text, show(result));
    Ok(())
}

fn show<T: std::fmt::Display>(o: Optional<T>) -> String {
    match o {
        Optional::Valid(v) => v.to_string(),
        Optional::Invalid => "invalid".to_string(),
    }
}

use std::collections::BTreeMap;

use calcex::{parse, Evaluator, Expr};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::{build_operator_tree, ContextWithMutableVariables, HashMapContext, Value};
use itertools::izip;

const BENCH_EXPRESSIONS_NAMES: [&str; 2] = ["flat", "nested"];
const BENCH_EXPRESSIONS_STRS: [&str; 2] = [
    "2.0 * 6.0 - 4.0 - 3.0 / 2.0 + 3.0 * 4.0 * x - 32.0 * y + 43.0 * z",
    "(x - 1.0 / (y * 5.0 + 1.0)) % 7.0 + 5.0 ^ (2.0 / (0.5 * z)) - -x",
];
const BENCH_EXPRESSIONS_REFS: [fn(f64, f64, f64) -> f64; 2] = [
    |x, y, z| 2.0 * 6.0 - 4.0 - 3.0 / 2.0 + 3.0 * 4.0 * x - 32.0 * y + 43.0 * z,
    |x, y, z| (x - 1.0 / (y * 5.0 + 1.0)) % 7.0 + 5.0f64.powf(2.0 / (0.5 * z)) + x,
];
const BENCH_X_RANGE: (usize, usize) = (0, 100);
const BENCH_Y: f64 = 3.0;
const BENCH_Z: f64 = 4.0;

fn assert_float_eq(f1: f64, f2: f64) {
    assert!((f1 - f2).abs() <= 1e-9 * (1.0 + f2.abs()), "{} {}", f1, f2);
}

fn reference_values() -> Vec<Vec<f64>> {
    BENCH_EXPRESSIONS_REFS
        .iter()
        .map(|f| {
            (BENCH_X_RANGE.0..BENCH_X_RANGE.1)
                .map(|i| f(i as f64, BENCH_Y, BENCH_Z))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
}

fn calcex_parse(c: &mut Criterion) {
    for (expr_str, name) in izip!(BENCH_EXPRESSIONS_STRS, BENCH_EXPRESSIONS_NAMES) {
        c.bench_function(format!("calcex_parse_{}", name).as_str(), |b| {
            b.iter(|| parse::<f64>(black_box(expr_str)).unwrap())
        });
    }
}

fn calcex_eval(c: &mut Criterion) {
    let exprs = BENCH_EXPRESSIONS_STRS
        .iter()
        .map(|s| parse::<f64>(s).unwrap())
        .collect::<Vec<Expr>>();
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("y", BENCH_Y);
    evaluator.set_variable("z", BENCH_Z);
    for (expr, name, refs) in izip!(exprs.iter(), BENCH_EXPRESSIONS_NAMES, reference_values()) {
        c.bench_function(format!("calcex_eval_{}", name).as_str(), |b| {
            b.iter(|| {
                for i in BENCH_X_RANGE.0..BENCH_X_RANGE.1 {
                    evaluator.set_variable("x", black_box(i as f64));
                    assert_float_eq(evaluator.evaluate(expr).unwrap(), refs[i]);
                }
            })
        });
    }
}

fn evalexpr_eval(c: &mut Criterion) {
    let nodes = BENCH_EXPRESSIONS_STRS
        .iter()
        .map(|s| build_operator_tree(s).unwrap())
        .collect::<Vec<_>>();
    let mut context = HashMapContext::new();
    context
        .set_value("y".to_string(), Value::Float(BENCH_Y))
        .unwrap();
    context
        .set_value("z".to_string(), Value::Float(BENCH_Z))
        .unwrap();
    for (node, name, refs) in izip!(nodes.iter(), BENCH_EXPRESSIONS_NAMES, reference_values()) {
        c.bench_function(format!("evalexpr_eval_{}", name).as_str(), |b| {
            b.iter(|| {
                for i in BENCH_X_RANGE.0..BENCH_X_RANGE.1 {
                    context
                        .set_value("x".to_string(), Value::Float(black_box(i as f64)))
                        .unwrap();
                    let res = node.eval_float_with_context(&context).unwrap();
                    assert_float_eq(res, refs[i]);
                }
            })
        });
    }
}

fn fasteval_eval(c: &mut Criterion) {
    let mut vars: BTreeMap<String, f64> = BTreeMap::new();
    vars.insert("y".to_string(), BENCH_Y);
    vars.insert("z".to_string(), BENCH_Z);
    for (expr_str, name, refs) in izip!(
        BENCH_EXPRESSIONS_STRS,
        BENCH_EXPRESSIONS_NAMES,
        reference_values()
    ) {
        c.bench_function(format!("fasteval_eval_{}", name).as_str(), |b| {
            b.iter(|| {
                for i in BENCH_X_RANGE.0..BENCH_X_RANGE.1 {
                    vars.insert("x".to_string(), black_box(i as f64));
                    let res = fasteval::ez_eval(expr_str, &mut vars).unwrap();
                    assert_float_eq(res, refs[i]);
                }
            })
        });
    }
}

criterion_group!(benches, calcex_parse, calcex_eval, evalexpr_eval, fasteval_eval);
criterion_main!(benches);

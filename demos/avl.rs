use avl_tree::{BalancedOrderedTree, RotationRule, Traversal};
use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

#[derive(Debug, Parser)]
#[clap(version = "1.0", author = "J. Zrake <jzrake@clemson.edu>")]
struct Opts {
    /// Values to insert, in order
    values: Vec<i64>,

    /// Rotation rule: height or presence
    #[clap(short = 'r', long, default_value = "height")]
    rule: RotationRule,

    /// Values to remove after insertion (repeatable)
    #[clap(short = 'x', long = "remove")]
    remove: Vec<i64>,

    /// Log level: off, error, warn, info, debug or trace
    #[clap(short = 'l', long, default_value = "info")]
    log_level: String,
}

fn main() {
    let opts = Opts::parse();

    let level: LevelFilter = opts.log_level.parse().unwrap();
    SimpleLogger::new().with_level(level).init().unwrap();
    info!("{:?}", opts);

    let values = if opts.values.is_empty() {
        vec![8, 6, 7, 5, 3, 0, 9, 4, 2, 1]
    } else {
        opts.values.clone()
    };

    let mut tree = BalancedOrderedTree::new(|a: &i64, b: &i64| a < b, |a: &i64, b: &i64| a > b)
        .with_rotation_rule(opts.rule);

    println!("rule .................. {}", tree.rotation_rule());

    for x in &values {
        tree.insert(*x);
        println!("insert {:>6} ......... height {}", x, tree.height());
    }
    println!();

    let mut buffer = vec![0i64; tree.size()];

    for traversal in Traversal::ALL.iter() {
        tree.copy_into(*traversal, &mut buffer).unwrap();
        println!("{:<10} ............ {:?}", traversal.to_string(), buffer);
    }
    println!();

    for x in &opts.remove {
        let removed = tree.remove(x);
        println!("remove {:>6} ......... {}", x, if removed { "removed" } else { "absent" });
    }
    println!("size .................. {}", tree.size());
    println!("height ................ {}", tree.height());
    println!("balanced .............. {}", tree.is_balanced());

    if !tree.is_balanced() {
        info!("the {} rule left a node with sub-tree heights differing by more than one", tree.rotation_rule());
    }
}

use avl_set::{AvlTreeSet, Order};
use simplelog::{LevelFilter, SimpleLogger};

fn main() {
    // Trace level shows every rotation
    SimpleLogger::init(LevelFilter::Trace, simplelog::Config::default()).unwrap();

    let mut set = AvlTreeSet::new();
    for key in 1..=7 {
        set.insert(key);
    }
    set.remove(&4);

    println!("height: {}", set.height());
    for order in [Order::PreOrder, Order::InOrder, Order::PostOrder] {
        println!("{order:?}: {:?}", set.traverse(order).collect::<Vec<_>>());
    }
}

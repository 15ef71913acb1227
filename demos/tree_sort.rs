use avl_set::{AvlTreeSet, OrderedSet, TreeError};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Sorts the values and drops duplicates by reading back an in-order walk.
fn tree_sort<S, K>(values: &[K]) -> Result<Vec<K>, TreeError>
where
    S: OrderedSet<K> + Default,
    K: Copy,
{
    let mut set = S::default();
    for &value in values {
        set.add(value)?;
    }
    Ok(set.in_order().copied().collect())
}

fn main() -> Result<(), TreeError> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let values = [31, 4, 15, 9, 26, 5, 35, 8, 9, 7, 9, 31];
    let sorted = tree_sort::<AvlTreeSet<_>, _>(&values)?;
    info!("sorted {} values into {} unique keys", values.len(), sorted.len());
    println!("{sorted:?}");

    let readings = [2.5, -1.0, f64::NAN, 0.75];
    match tree_sort::<AvlTreeSet<_>, _>(&readings) {
        Ok(sorted) => println!("{sorted:?}"),
        Err(err) => println!("cannot sort readings: {err}"),
    }
    Ok(())
}

//==============================================================================
// Vector walkthrough: growth, insert/erase and error reporting, step by step.
//
// Run with: RUST_LOG=trace cargo run --bin vector_walkthrough
//==============================================================================

use colored::Colorize;
use dynvec::{with_values, Vector, VectorError};

fn show<T: std::fmt::Display>(label: &str, v: &Vector<T>) {
    println!(
        "  {:<18} {}  size={} capacity={}",
        label.cyan(),
        v,
        v.size(),
        v.capacity()
    );
}

fn report(label: &str, err: VectorError) {
    println!("  {:<18} {}", label.cyan(), err.to_string().red());
}

//==============================================================================
// Part 1: Amortized growth
//==============================================================================

fn growth() {
    println!("{}", "=== Growth from empty ===".bold());

    let mut v = Vector::new();
    let mut capacities = vec![v.capacity()];
    for _ in 0..5 {
        v.push_back(5);
        capacities.push(v.capacity());
    }
    show("after 5 pushes", &v);
    let trace: Vec<String> = capacities.iter().map(usize::to_string).collect();
    println!("  {:<18} {}", "capacities".cyan(), trace.join(" -> ").green());
    println!();
}

//==============================================================================
// Part 2: Positional mutation
//==============================================================================

fn mutation() -> Result<(), VectorError> {
    println!("{}", "=== Insert, erase, pop ===".bold());

    let mut v = Vector::with_options([with_values([1, 2, 3])]);
    show("with_values", &v);

    v.insert(1, 99)?;
    show("insert(1, 99)", &v);

    let erased = v.erase(0)?;
    show(&format!("erase(0) -> {}", erased), &v);

    let popped = v.pop_back()?;
    show(&format!("pop_back -> {}", popped), &v);

    v.resize(5, 0);
    show("resize(5, 0)", &v);

    let mut other = Vector::builder().fill(2, 7).build();
    v.swap(&mut other);
    show("swapped in", &v);
    show("swapped out", &other);
    println!();
    Ok(())
}

//==============================================================================
// Part 3: Errors are values
//==============================================================================

fn errors() {
    println!("{}", "=== Error reporting ===".bold());

    let mut v: Vector<i32> = Vector::with_capacity(4);
    show("reserved", &v);

    if let Err(err) = v.at(0) {
        report("at(0)", err);
    }
    if let Err(err) = v.front() {
        report("front()", err);
    }
    if let Err(err) = v.pop_back() {
        report("pop_back()", err);
    }
    if let Err(err) = v.insert(1, 10) {
        report("insert(1, 10)", err);
    }
    println!();
}

fn main() {
    env_logger::init();

    growth();
    if let Err(err) = mutation() {
        eprintln!("{} {}", "walkthrough failed:".red().bold(), err);
        std::process::exit(1);
    }
    errors();

    println!("{}", "Walkthrough complete".green().bold());
}

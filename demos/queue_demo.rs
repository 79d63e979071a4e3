extern crate arrayutils;

use arrayutils::{array, Queue, Value};
use std::error::Error;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Vec<String> = ::std::env::args().skip(1).collect();
    let lines = array::remove_empty_lines_via_filter(&args);

    let mut queue: Queue<String> = array::number_lines(&lines).into_iter().collect();
    info!(len = queue.len(), "queued lines");
    while !queue.is_empty() {
        println!("{}", queue.dequeue()?);
    }

    let values: Vec<Value> = lines.into_iter().map(Value::from).collect();
    let numbers = array::convert_to_numbers(&values);
    info!(count = numbers.len(), "numeric arguments");
    eprintln!("numbers: {:?}", numbers);

    // drained; reports the error
    if let Err(e) = queue.dequeue() {
        eprintln!("{}", e);
    }
    Ok(())
}

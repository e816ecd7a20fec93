use CircularQueueMini::core::audit::AuditedQueue;
use CircularQueueMini::core::log::append_logs;
use std::error::Error;
use std::io::{self, BufRead};

fn main() -> Result<(), Box<dyn Error>> {
    // First argument overrides where the operation log goes
    let log_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "output.ndjson".to_string());

    println!("Input:");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let input = line.trim_end_matches(['\r', '\n']);

    let mut queue = AuditedQueue::<char>::with_capacity(input.chars().count());
    println!("{}", queue.queue());

    for c in input.chars() {
        queue.enqueue(c);
        println!("{}", queue.queue());
    }

    while !queue.is_empty() {
        let c = queue.dequeue()?;
        println!("{c} <- {}", queue.queue());
    }

    // Append the operation log as NDJSON
    append_logs(queue.logs(), &log_path)?;
    println!("{} operations logged to {log_path}", queue.logs().len());
    Ok(())
}

//! Ring broadcast across worker threads.
//!
//! Rank 0 injects a token; every other rank receives it, increments it and
//! forwards it to its neighbor; rank 0 finally receives the token back after
//! a full round. Pure message passing, no shared mutable state.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use spinwait::io::console::{Color, Style};
use spinwait::io::logging;
use spinwait::{color_println, styled_println};

const RING_SIZE: usize = 4;
const TOKEN: u64 = 42;

fn ring_node(rank: usize, inbox: Receiver<u64>, next: Sender<u64>) {
    if rank == 0 {
        color_println!(Color::Yellow, "rank 0 sends m = {TOKEN}");
        next.send(TOKEN).expect("ring broken");
        let token = inbox.recv().expect("ring broken");
        color_println!(Color::Blue, "rank 0 received m = {token} after a full round");
    } else {
        let token = inbox.recv().expect("ring broken");
        color_println!(Color::Blue, "rank {rank} received m = {token}");
        let token = token + 1;
        next.send(token).expect("ring broken");
        color_println!(Color::Yellow, "rank {rank} sends m = {token}");
    }
}

fn main() {
    logging::init();
    styled_println!(Color::Red, Style::Bold, "Start message passing around the ring!");

    // Channel i is the inbox of rank i; rank i forwards into inbox (i + 1).
    let mut inbox_txs = Vec::with_capacity(RING_SIZE);
    let mut inbox_rxs = Vec::with_capacity(RING_SIZE);
    for _ in 0..RING_SIZE {
        let (tx, rx) = mpsc::channel();
        inbox_txs.push(tx);
        inbox_rxs.push(rx);
    }
    inbox_txs.rotate_left(1);

    let mut nodes = Vec::with_capacity(RING_SIZE);
    for (rank, (inbox, next)) in inbox_rxs.into_iter().zip(inbox_txs).enumerate() {
        nodes.push(thread::spawn(move || ring_node(rank, inbox, next)));
    }
    for node in nodes {
        node.join().expect("ring node panicked");
    }

    log::info!("token travelled {} hops", RING_SIZE);
}

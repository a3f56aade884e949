#!/usr/bin/env rust-script
//! ```cargo
//! [dependencies]
//! yansi = "0.5"
//! ```
extern crate yansi;
use std::process::Command;

macro_rules! run_command {
    ($cmd:expr , $($arg:expr),*) => (
        let mut command = command!($cmd, $($arg),*);
        let mut child = command.spawn().unwrap();
        let status = child.wait().unwrap();
        if !status.success() {
            print!("> {}",yansi::Paint::red("qualify terminates due to error"));
            std::process::exit(-1);
        }
    )
}

macro_rules! command {
    ($cmd:expr , $($arg:expr),*) => (
        {
            print!("\n> {}",yansi::Paint::yellow($cmd));
            let mut command = Command::new($cmd);
            $(
                print!(" {}",yansi::Paint::yellow(&$arg));
                command.arg($arg);
            )*
            print!("\n");
            command
        }
    )
}

#[rustfmt::skip]
fn main() {
    println!("Qualify xmltype_handler");

    // Format
    run_command!("cargo", "fmt");

    // Build
    run_command!("cargo", "build", "--package", "xmltype_handler");
    run_command!("cargo", "build", "--package", "xmltype_handler", "--release");

    // Clippy
    run_command!("cargo", "+nightly", "clippy", "--all-targets", "--package", "xmltype_handler", "--", "-D", "warnings");

    // doc
    run_command!("cargo", "+nightly", "doc", "--package", "xmltype_handler", "--no-deps", "--open");

    // Run tests
    run_command!("cargo", "test", "--package", "xmltype_handler", "--release");
    run_command!("cargo", "test", "--package", "xmltype_handler");

    // check git status
    let mut cmd = command!("git", "status", "-s");
    let child = cmd.stdout(std::process::Stdio::piped()).spawn().unwrap();
    let output = child.wait_with_output().unwrap();
    if output.stdout.len() > 0 {
        print!("> {}", yansi::Paint::red("there are unsubmitted files"));
        std::process::exit(-1);
    }

    // say goodbye
    println!("\n> all done :-)  Looks like you're ready to \"cargo publish\"?");
}

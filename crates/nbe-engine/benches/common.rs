// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_go_source(size: usize) -> String {
    let base = "// Connect to the server.\nnc, err := nats.Connect(url)\nif err != nil {\n\tlog.Fatal(err)\n}\n\n/*\nSubscriptions are\nasynchronous.\n*/\nsub, _ := nc.Subscribe(\"greet.*\", handler)\n\n";
    format!("package main\n\n{}", base.repeat(size))
}

#[allow(dead_code)]
pub fn generate_shell_source(size: usize) -> String {
    let base = "# Publish a message.\nnats pub greet.joe hello\n\n# Then read it back.\nnats sub greet.joe --count 1\n\n";
    format!("#!/bin/sh\n\n{}", base.repeat(size))
}

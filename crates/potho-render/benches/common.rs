// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_reply(size: usize) -> String {
    let base = "Here is your plan:\n* **Step 1:** revise $a^2 + b^2 = c^2$\n* **Step 2:** practice $$\\int_0^1 x\\,dx$$\n\nBudget about $20 for books.\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_math_heavy(spans: usize) -> String {
    let mut content = String::new();
    for i in 0..spans {
        content.push_str(&format!("term $x_{i}$ and **bold {i}** "));
    }
    content
}

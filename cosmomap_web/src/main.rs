// CosmoMap - Leptos 0.8 CSR entry point

fn main() {
    cosmomap::start();
}

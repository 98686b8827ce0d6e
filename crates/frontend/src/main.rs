use frontend::HeaderMount;

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    HeaderMount::default().render();
}

//! Network UI Entry Point

fn main() {
    network_ui::start();
}

use std::io;

use kingrace::Engine;

fn main() -> anyhow::Result<()> {
    kingrace::print_engine_info();
    kingrace::print_binary_info();

    let mut engine = Engine::new(io::stdin().lock(), io::stdout().lock());
    engine.run()
}

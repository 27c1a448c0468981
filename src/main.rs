use std::io;

use route_net::console;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    console::run(&mut stdin.lock(), &mut stdout.lock())
}

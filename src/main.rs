use std::env;

mod cli;
mod settings;
mod terminal;

fn main() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}

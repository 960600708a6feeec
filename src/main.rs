mod cli;
mod history;
mod pass;
mod rand;
mod settings;
mod terminal;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    std::process::exit(cli::run());
}

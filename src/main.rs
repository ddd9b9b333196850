#[tokio::main(flavor = "current_thread")]
async fn main() {
    ghissues::logging::init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = ghissues::run::run(args, None).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

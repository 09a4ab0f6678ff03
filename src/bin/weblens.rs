use weblens::cli::entrypoint::run;

fn main() -> std::io::Result<()> {
    // The startup core ends here; the frozen config is what the log
    // parser, storage engine, and dashboard would consume next.
    let _config = run()?;
    Ok(())
}

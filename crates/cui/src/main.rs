fn main() -> anyhow::Result<()> {
    let config = termjack_data::table_config_from_env()?;
    let tally = termjack_cui::run(termjack_cui::LaunchOptions { config })?;
    println!(
        "rounds {}  won {}  lost {}  pushed {}",
        tally.rounds, tally.wins, tally.losses, tally.pushes
    );
    Ok(())
}

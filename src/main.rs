fn main() -> Result<(), Box<dyn std::error::Error>> {
    music_organizer::runtime::run()?;
    Ok(())
}

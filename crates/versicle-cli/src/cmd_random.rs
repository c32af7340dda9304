use anyhow::Result;
use versicle::select::random_verse;
use versicle_store::Store;

pub fn run() -> Result<()> {
    let library = Store::new().load_library()?;

    let mut rng = rand::rng();
    let verse = random_verse(&library, &mut rng)?;
    println!("{verse}");
    Ok(())
}

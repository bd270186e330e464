use propfile::Properties;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = "\
# Demo application settings
app.name = demo
app.workers = 4
app.debug = off
app.hosts = alpha.local, beta.local
banner = first line\\
second line
";

    let mut props = Properties::new();
    props.parse(source);
    println!("Parsed {} properties\n", props.len());

    println!("Name:    {}", props.get("app.name").unwrap());
    println!("Workers: {}", props.get_int("app.workers")?);
    println!("Debug:   {}", props.get_bool("app.debug")?);
    println!("Hosts:   {:?}", props.get_list("app.hosts")?);
    println!("Banner:  {}", props.get("banner").unwrap());

    // Change a value and write the result out
    props.set("app.workers", "8");

    let out_path = std::env::temp_dir().join("propfile_demo.properties");
    props.save_as(&out_path)?;
    println!("\nSaved modified file to {}", out_path.display());

    Ok(())
}

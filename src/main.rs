use clap::Parser;
use fieldpath::{Error, FieldPathEngine, ParentRole};
use std::path::PathBuf;

/// Resolves a field path against an empty message of the path's root type
/// and reports what it addresses.
#[derive(Parser, Debug)]
#[command(name = "fieldpath", version, about)]
struct Args {
    /// JSON schema document describing the message types.
    schema: PathBuf,

    /// Field path, e.g. `Person[home][city]`.
    path: String,

    /// Fail instead of materializing unset nested messages.
    #[arg(long)]
    read_only: bool,

    /// Print the message tree after resolution.
    #[arg(long)]
    show_message: bool,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();

    let engine = FieldPathEngine::builder()
        .with_schema_file(&args.schema)?
        .create_missing(!args.read_only)
        .build()?;

    let path = engine.parse(&args.path)?;
    let mut message = engine.new_message(path.type_name())?;

    {
        let resolved = engine.resolve(&mut message, &path)?;
        println!("path:  {}", path);
        println!("role:  {}", resolved.role());
        match resolved.field() {
            Some(field) => println!(
                "field: {} ({} {})",
                field.name(),
                field.cardinality(),
                field.kind()
            ),
            None => println!("field: <root {}>", path.type_name()),
        }
        if let Some(index) = resolved.array_index() {
            println!("index: {}", index);
        }
        if resolved.role() == ParentRole::Scalar {
            println!("value: {}", resolved.get()?);
        }
    }

    if args.show_message {
        println!("{:#?}", message);
    }
    Ok(())
}

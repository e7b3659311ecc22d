use protobuf_codegen_pure::Codegen;

fn main() {
    println!("cargo:rerun-if-changed=src/mvt/vector_tile.proto");
    Codegen::new()
        .out_dir("src/mvt")
        .inputs(&["src/mvt/vector_tile.proto"])
        .include("src/mvt")
        .run()
        .expect("Compiling vector_tile.proto failed.");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    anscombe::runner::main(std::env::args().collect())
}

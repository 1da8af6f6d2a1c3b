fn main() {
    prizewheel::main();
}

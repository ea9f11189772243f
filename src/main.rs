fn main() -> eframe::Result {
    lootdex::run_gui()
}

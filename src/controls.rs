use super::*;

#[derive(Deserialize)]
pub struct Controls {
    pub spin: Vec<geng::Key>,
    pub confirm: Vec<geng::Key>,
    pub clear: Vec<geng::Key>,
    pub remove_last: Vec<geng::Key>,
    pub quit: Vec<geng::Key>,
    /// Starts or stops typing into the name input
    pub edit: Vec<geng::Key>,
    /// While typing
    pub add: Vec<geng::Key>,
    /// While typing
    pub clear_input: Vec<geng::Key>,
}

/// Bold marker. Splitting on it alternates normal and emphasized weight by
/// position, so an unpaired marker simply flips the weight of what follows.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static str = "**";
}

/// Builds a [`crate::MapModule`] from `key => entry` arms.
///
/// Keys are anything convertible into a [`crate::Key`]; entries are built
/// with [`crate::Entry`] constructors.
///
/// ```rust
/// use bindery::{map_module, Entry};
///
/// let module = map_module! {
///     "answer" => Entry::instance(42_i32),
///     "greeting" => Entry::factory(|_options| async { Ok("hello".to_string()) }),
/// };
/// ```
#[macro_export]
macro_rules! map_module {
    ($($key:expr => $entry:expr),* $(,)?) => {
        $crate::MapModule::new([
            $(
                ($crate::Key::from($key), $entry)
            ),*
        ])
    };
}

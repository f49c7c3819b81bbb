//! Dynamic array demonstration.
//!
//! Stores fixed-layout user records in a type-erased array, prints every
//! entry, then pops the last one and prints it.

use strata::array::{ArrayError, Element, RawArray};
use strata_test_utils::fixtures::User;

fn print_user_array(array: &RawArray) {
    for (index, bytes) in array.iter().enumerate() {
        let user = User::read_from(bytes);
        println!("Index: [{index}], {user}");
    }
}

fn main() -> Result<(), ArrayError> {
    let users = [User::new("meg", 1), User::new("bobo", 2), User::new("rigby", 3)];

    let mut array = RawArray::new(User::SIZE)?;
    let mut scratch = [0u8; User::SIZE];
    for user in &users {
        user.write_to(&mut scratch);
        array.push(&scratch)?;
    }

    print_user_array(&array);

    let mut popped = [0u8; User::SIZE];
    array.pop_into(&mut popped)?;
    println!("Popped User - {}", User::read_from(&popped));
    Ok(())
}

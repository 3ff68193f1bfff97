use super::constants::{
    CONTRACT_NAME, MATCHED_DEFAULT, MATCHED_WITH_SENTINEL, SOLIDITY_VERSION_PRAGMA,
    SPDX_LICENSE_IDENTIFIER, STATEMENT_INDENT,
};
use crate::record::UserRecord;

/// Renders the constructor statement that pushes `user` onto the `users` array.
///
/// `UserType` is placed between quotes as-is, without escaping.
pub fn render_statement(user: &UserRecord) -> String {
    format!(
        "{STATEMENT_INDENT}users.push(User(\"{}\", {}, {}, {}, {}, {MATCHED_DEFAULT}, {MATCHED_WITH_SENTINEL}));\n",
        user.user_type, user.energy_balance, user.price, user.classification, user.radian,
    )
}

/// Renders the complete contract source with one statement per user, in order.
pub fn render_contract(users: &[UserRecord]) -> String {
    let user_entries: String = users
        .iter()
        .map(|user| {
            let statement = render_statement(user);
            tracing::trace!("rendered {}", statement.trim_end());
            statement
        })
        .collect();

    format!(
        r#"
// SPDX-License-Identifier: {SPDX_LICENSE_IDENTIFIER}
pragma solidity {SOLIDITY_VERSION_PRAGMA};

contract {CONTRACT_NAME} {{
    address public owner;

    struct User {{
        string userType;
        int energyBalance;
        uint price;
        uint classification;
        uint radian;
        bool matched;
        uint matchedWith;
    }}

    User[] public users;

    constructor() {{
        owner = msg.sender;
{user_entries}    }}
}}
"#
    )
}

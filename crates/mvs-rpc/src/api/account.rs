//! Account and address management commands.

use serde_json::Value;

use crate::client::RpcClient;
use crate::error::ClientError;
use crate::protocol::Params;

impl RpcClient {
    /// `getnewaccount`: create an account and return its mnemonic.
    /// `language` picks the mnemonic dictionary (`en`, `es`, `ja`,
    /// `zh_Hans`, `zh_Hant`, `any`); the node defaults to `en`.
    pub fn get_new_account(
        &self,
        account: &str,
        auth: &str,
        language: Option<&str>,
    ) -> Result<Value, ClientError> {
        self.call(
            "getnewaccount",
            Params::new().arg(account).arg(auth).opt("language", language),
        )
    }

    /// `getaccount`: show account mnemonic and addresses. `lastword` is the
    /// last word of the backup phrase, used as proof of ownership.
    pub fn get_account(&self, account: &str, auth: &str, lastword: &str) -> Result<Value, ClientError> {
        self.call(
            "getaccount",
            Params::new().arg(account).arg(auth).arg(lastword),
        )
    }

    /// `deleteaccount`: remove a local account.
    pub fn delete_account(
        &self,
        account: &str,
        auth: &str,
        lastword: &str,
    ) -> Result<Value, ClientError> {
        self.call(
            "deleteaccount",
            Params::new().arg(account).arg(auth).arg(lastword),
        )
    }

    /// `importaccount`: recover an account from its mnemonic.
    ///
    /// The node takes the mnemonic as a single space-joined positional
    /// string; the account name and password travel as always-present named
    /// options. `hd_index` restores addresses up to the given HD index.
    pub fn import_account(
        &self,
        words: &[&str],
        account: &str,
        password: &str,
        language: Option<&str>,
        hd_index: Option<u32>,
    ) -> Result<Value, ClientError> {
        self.call(
            "importaccount",
            Params::new()
                .arg(words.join(" "))
                .named("accountname", account)
                .named("password", password)
                .opt("language", language)
                .opt("hd_index", hd_index),
        )
    }

    /// `changepasswd`: set a new account password.
    pub fn change_passwd(
        &self,
        account: &str,
        auth: &str,
        password: &str,
    ) -> Result<Value, ClientError> {
        self.call(
            "changepasswd",
            Params::new().arg(account).arg(auth).named("password", password),
        )
    }

    /// `getnewaddress`: generate addresses; `number` defaults to 1 on the node.
    pub fn get_new_address(
        &self,
        account: &str,
        auth: &str,
        number: Option<u32>,
    ) -> Result<Value, ClientError> {
        self.call(
            "getnewaddress",
            Params::new().arg(account).arg(auth).opt("number", number),
        )
    }

    /// `listaddresses`: list the account's addresses.
    pub fn list_addresses(&self, account: &str, auth: &str) -> Result<Value, ClientError> {
        self.call("listaddresses", Params::new().arg(account).arg(auth))
    }

    /// `validateaddress`: check a payment address.
    pub fn validate_address(&self, address: &str) -> Result<Value, ClientError> {
        self.call("validateaddress", Params::new().arg(address))
    }

    /// `getpublickey`: public key of one of the account's addresses.
    pub fn get_public_key(
        &self,
        account: &str,
        auth: &str,
        address: &str,
    ) -> Result<Value, ClientError> {
        self.call(
            "getpublickey",
            Params::new().arg(account).arg(auth).arg(address),
        )
    }

    /// `importkeyfile`: import an account key file. `file_content` takes
    /// precedence over the `file` path when both are given.
    pub fn import_keyfile(
        &self,
        account: &str,
        auth: &str,
        file: &str,
        file_content: &str,
    ) -> Result<Value, ClientError> {
        self.call(
            "importkeyfile",
            Params::new().arg(account).arg(auth).arg(file).arg(file_content),
        )
    }

    /// `dumpkeyfile`: export the account key file. With `data` set the
    /// keyfile content is returned in the response instead of written to
    /// `destination`.
    pub fn dump_keyfile(
        &self,
        account: &str,
        auth: &str,
        lastword: &str,
        destination: Option<&str>,
        data: bool,
    ) -> Result<Value, ClientError> {
        self.call(
            "dumpkeyfile",
            Params::new()
                .arg(account)
                .arg(auth)
                .arg(lastword)
                .opt_arg(destination)
                .flag("--data", data),
        )
    }
}

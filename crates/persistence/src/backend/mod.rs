// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend utilities.
//!
//! Only `SQLite` is supported. Connection setup, migrations and PRAGMA
//! configuration live here; key/value access lives in `storage`.

pub mod sqlite;

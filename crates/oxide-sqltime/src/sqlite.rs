//! sqlx integration for SQLite.
//!
//! Both types are stored as TEXT in their canonical text form. An invalid
//! [`NullTime`] binds as SQL NULL and SQL NULL decodes to an invalid one.

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Database, Decode, Encode, Type, ValueRef};

use crate::codec::UnmarshalText;
use crate::{NullTime, Time};

fn text_type_info() -> SqliteTypeInfo {
    <str as Type<Sqlite>>::type_info()
}

fn text_compatible(ty: &SqliteTypeInfo) -> bool {
    <str as Type<Sqlite>>::compatible(ty) || <[u8] as Type<Sqlite>>::compatible(ty)
}

impl Type<Sqlite> for Time {
    fn type_info() -> SqliteTypeInfo {
        text_type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        text_compatible(ty)
    }
}

impl<'q> Encode<'q, Sqlite> for Time {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <String as Encode<'q, Sqlite>>::encode(self.to_string(), buf)
    }
}

impl<'r> Decode<'r, Sqlite> for Time {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let bytes = <&[u8] as Decode<Sqlite>>::decode(value)?;
        let mut time = Self::default();
        time.unmarshal_text(bytes)?;
        Ok(time)
    }
}

impl Type<Sqlite> for NullTime {
    fn type_info() -> SqliteTypeInfo {
        text_type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        text_compatible(ty)
    }
}

impl<'q> Encode<'q, Sqlite> for NullTime {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self.as_option() {
            Some(time) => time.encode_by_ref(buf),
            None => Ok(IsNull::Yes),
        }
    }
}

impl<'r> Decode<'r, Sqlite> for NullTime {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(Self::null());
        }
        let bytes = <&[u8] as Decode<Sqlite>>::decode(value)?;
        let mut decoded = Self::null();
        decoded.unmarshal_text(bytes)?;
        Ok(decoded)
    }
}

/// Some statistics about the use of an [`XmlValueHandler`](crate::XmlValueHandler).
///
/// A snapshot is obtained with [`XmlValueHandler::statistics`](crate::XmlValueHandler::statistics);
/// the counters can be reset with
/// [`XmlValueHandler::reset_statistics`](crate::XmlValueHandler::reset_statistics).
#[derive(Debug, Clone)]
pub struct HandlerStatistics {
    fetch_count: u32,
    null_fetch_count: u32,
    fallback_read_count: u32,
    swallowed_read_failure_count: u32,
    unsupported_type_count: u32,
    native_bind_count: u32,
    converted_bind_count: u32,
    null_bind_count: u32,
    duplicate_count: u32,
    duplicated_bytes: u64,
    created_at: time::OffsetDateTime,
    last_reset_at: time::OffsetDateTime,
}

impl Default for HandlerStatistics {
    fn default() -> Self {
        let timestamp = time::OffsetDateTime::now_utc();
        Self {
            created_at: timestamp,
            last_reset_at: timestamp,
            fetch_count: 0,
            null_fetch_count: 0,
            fallback_read_count: 0,
            swallowed_read_failure_count: 0,
            unsupported_type_count: 0,
            native_bind_count: 0,
            converted_bind_count: 0,
            null_bind_count: 0,
            duplicate_count: 0,
            duplicated_bytes: 0,
        }
    }
}

impl HandlerStatistics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self {
            created_at: self.created_at,
            last_reset_at: time::OffsetDateTime::now_utc(),
            ..Default::default()
        };
    }

    pub(crate) fn add_fetch(&mut self, is_null: bool) {
        self.fetch_count += 1;
        if is_null {
            self.null_fetch_count += 1;
        }
    }
    pub(crate) fn add_fallback_read(&mut self) {
        self.fallback_read_count += 1;
    }
    pub(crate) fn add_swallowed_read_failure(&mut self) {
        self.swallowed_read_failure_count += 1;
    }
    pub(crate) fn add_unsupported_type(&mut self) {
        self.unsupported_type_count += 1;
    }
    pub(crate) fn add_native_bind(&mut self) {
        self.native_bind_count += 1;
    }
    pub(crate) fn add_converted_bind(&mut self) {
        self.converted_bind_count += 1;
    }
    pub(crate) fn add_null_bind(&mut self) {
        self.null_bind_count += 1;
    }
    pub(crate) fn add_duplicate(&mut self, bytes: u64) {
        self.duplicate_count += 1;
        self.duplicated_bytes += bytes;
    }

    /// Returns the number of fetched column values since the last reset.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count
    }

    /// Returns the number of fetched column values that were NULL or could not be read.
    pub fn null_fetch_count(&self) -> u32 {
        self.null_fetch_count
    }

    /// Returns how often the generic read failed and the XML stream read was used instead.
    pub fn fallback_read_count(&self) -> u32 {
        self.fallback_read_count
    }

    /// Returns how often both reads failed, so that the value was treated as absent.
    pub fn swallowed_read_failure_count(&self) -> u32 {
        self.swallowed_read_failure_count
    }

    /// Returns how often a fetch failed because of an unsupported runtime type.
    pub fn unsupported_type_count(&self) -> u32 {
        self.unsupported_type_count
    }

    /// Returns the number of binds of driver-native XML objects that were already available.
    pub fn native_bind_count(&self) -> u32 {
        self.native_bind_count
    }

    /// Returns the number of binds that required the construction of a native XML object.
    pub fn converted_bind_count(&self) -> u32 {
        self.converted_bind_count
    }

    /// Returns the number of typed NULL binds.
    pub fn null_bind_count(&self) -> u32 {
        self.null_bind_count
    }

    /// Returns the number of independent copies that were created, of own content as well
    /// as of content from other drivers.
    pub fn duplicate_count(&self) -> u32 {
        self.duplicate_count
    }

    /// Returns the accumulated size of the independent copies.
    pub fn duplicated_bytes(&self) -> u64 {
        self.duplicated_bytes
    }
}

impl std::fmt::Display for HandlerStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "XML value handler statistics")?;
        writeln!(f, "Created at:     {}", self.created_at)?;
        writeln!(f, "Last reset at:  {}", self.last_reset_at)?;
        writeln!(f, "Fetches")?;
        writeln!(f, "  - count:                {}", self.fetch_count)?;
        writeln!(f, "  - NULL:                 {}", self.null_fetch_count)?;
        writeln!(f, "  - fallback reads:       {}", self.fallback_read_count)?;
        writeln!(
            f,
            "  - swallowed failures:   {}",
            self.swallowed_read_failure_count
        )?;
        writeln!(f, "  - unsupported types:    {}", self.unsupported_type_count)?;
        writeln!(f, "Binds")?;
        writeln!(f, "  - native:               {}", self.native_bind_count)?;
        writeln!(f, "  - converted:            {}", self.converted_bind_count)?;
        writeln!(f, "  - NULL:                 {}", self.null_bind_count)?;
        writeln!(f, "Copies")?;
        writeln!(f, "  - count:                {}", self.duplicate_count)?;
        writeln!(f, "  - bytes:                {}", self.duplicated_bytes)?;
        Ok(())
    }
}

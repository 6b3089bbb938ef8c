// Code generated by genesis. DO NOT EDIT.

pub mod mypkg {
    use std::collections::HashMap;
    use std::io::{self, Cursor, Read, Seek, SeekFrom};
    use std::sync::LazyLock;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use chrono::{DateTime, Utc};
    use http::{header, response, Method, Request, Response, StatusCode};
    use regex::Regex;

    static ASSET_NAMES: &[&str] = &[];

    static ASSET_MAP: LazyLock<HashMap<&'static str, File>> = LazyLock::new(|| {
        HashMap::new()
    });

    /// An embedded file.
    #[derive(Debug)]
    pub struct File {
        name: &'static str,
        hash: &'static str,
        size: u64,
        mod_time_secs: i64,
        mod_time_nanos: u32,
        data: &'static [u8],
    }

    impl File {
        pub fn name(&self) -> &'static str {
            self.name
        }

        pub fn hash(&self) -> &'static str {
            self.hash
        }

        pub fn size(&self) -> u64 {
            self.size
        }

        pub fn mod_time(&self) -> SystemTime {
            let secs = Duration::from_secs(self.mod_time_secs.unsigned_abs());
            let base = if self.mod_time_secs < 0 {
                UNIX_EPOCH - secs
            } else {
                UNIX_EPOCH + secs
            };
            base + Duration::from_nanos(u64::from(self.mod_time_nanos))
        }

        pub fn data(&self) -> &'static [u8] {
            self.data
        }
    }

    /// Returns the contents of an embedded file.
    pub fn asset(name: &str) -> Option<&'static [u8]> {
        asset_file(name).map(File::data)
    }

    /// Looks up an embedded file by name, then by hash-embedded name.
    ///
    /// A hash-embedded name only matches when the hash is the file's own.
    pub fn asset_file(name: &str) -> Option<&'static File> {
        if let Some(f) = ASSET_MAP.get(name) {
            return Some(f);
        }
        let f = ASSET_MAP.get(trim_name_hash(name).as_str())?;
        (join_name_hash(f.name(), f.hash()) == name).then_some(f)
    }

    /// Returns the names of all embedded files in generation order.
    pub fn asset_names() -> &'static [&'static str] {
        ASSET_NAMES
    }

    /// Returns the hash-embedded name of an embedded file, or `name`
    /// unchanged when there is no such file.
    pub fn asset_name_with_hash(name: &str) -> String {
        match asset_file(name) {
            Some(f) => join_name_hash(f.name(), f.hash()),
            None => name.to_string(),
        }
    }

    /// Read-only filesystem over the embedded files.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct FileSystem;

    impl FileSystem {
        /// Opens an embedded file by name or hash-embedded name.
        pub fn open(&self, name: &str) -> io::Result<HttpFile> {
            asset_file(name).map(HttpFile::new).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("open {name}: file does not exist"),
                )
            })
        }
    }

    /// An open embedded file.
    ///
    /// Reads and seeks go to an in-memory cursor over the file's bytes.
    #[derive(Debug)]
    pub struct HttpFile {
        file: &'static File,
        reader: Cursor<&'static [u8]>,
    }

    impl HttpFile {
        fn new(file: &'static File) -> Self {
            Self {
                file,
                reader: Cursor::new(file.data()),
            }
        }

        /// The embedded file behind this handle.
        pub fn file(&self) -> &'static File {
            self.file
        }

        pub fn metadata(&self) -> Metadata {
            Metadata {
                name: self.file.name(),
                size: self.file.size(),
            }
        }

        /// Embedded files are never directories, so listing always fails.
        pub fn read_dir(&self) -> io::Result<Vec<Metadata>> {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("readdir {}: permission denied", self.file.name()),
            ))
        }
    }

    impl Read for HttpFile {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reader.read(buf)
        }
    }

    impl Seek for HttpFile {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.reader.seek(pos)
        }
    }

    /// Metadata of an open embedded file.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Metadata {
        name: &'static str,
        size: u64,
    }

    impl Metadata {
        pub fn name(&self) -> &'static str {
            self.name
        }

        pub fn len(&self) -> u64 {
            self.size
        }

        pub fn is_empty(&self) -> bool {
            self.size == 0
        }

        pub fn is_dir(&self) -> bool {
            false
        }

        /// Unix permission bits.
        pub fn mode(&self) -> u32 {
            0o444
        }

        /// Always the Unix epoch, whatever the file's real modification time.
        pub fn modified(&self) -> SystemTime {
            UNIX_EPOCH
        }
    }

    /// Serves embedded files over HTTP.
    ///
    /// Requests for hash-embedded names are cacheable for one year.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct FileServer;

    impl FileServer {
        pub fn serve<B>(&self, req: &Request<B>) -> Response<Vec<u8>> {
            let Ok(path) = urlencoding::decode(req.uri().path()) else {
                return error_response(StatusCode::NOT_FOUND, "404 page not found\n");
            };
            let mut name = path.into_owned();
            if !name.starts_with('/') {
                name.insert(0, '/');
            }

            let Some(file) = asset_file(&clean_path(&name)) else {
                return error_response(StatusCode::NOT_FOUND, "404 page not found\n");
            };

            let mut builder = Response::builder();
            if has_name_hash(&name) {
                builder = builder.header(header::CACHE_CONTROL, "max-age=31536000");
            }
            serve_content(req, file, builder)
        }
    }

    enum ByteRange {
        Full,
        Partial(usize, usize),
        Unsatisfiable,
    }

    fn serve_content<B>(
        req: &Request<B>,
        file: &'static File,
        mut builder: response::Builder,
    ) -> Response<Vec<u8>> {
        let modified = last_modified(file);
        if let Some(date) = modified {
            builder = builder.header(header::LAST_MODIFIED, date.format(HTTP_DATE).to_string());
        }
        if let Some(status) = check_preconditions(req, modified) {
            return finish(builder.status(status), Vec::new());
        }

        let data = file.data();
        let size = data.len();
        let (status, body) = match requested_range(req, modified, size) {
            ByteRange::Full => (StatusCode::OK, data),
            ByteRange::Partial(start, end) => {
                let range = format!("bytes {start}-{}/{size}", end - 1);
                builder = builder.header(header::CONTENT_RANGE, range);
                (StatusCode::PARTIAL_CONTENT, &data[start..end])
            }
            ByteRange::Unsatisfiable => {
                let builder = builder
                    .status(StatusCode::RANGE_NOT_SATISFIABLE)
                    .header(header::CONTENT_RANGE, format!("bytes */{size}"))
                    .header(header::CONTENT_TYPE, "text/plain; charset=utf-8");
                return finish(builder, b"416 requested range not satisfiable\n".to_vec());
            }
        };

        let builder = builder
            .status(status)
            .header(header::CONTENT_TYPE, content_type(file))
            .header(header::ACCEPT_RANGES, "bytes")
            .header(header::CONTENT_LENGTH, body.len().to_string());
        if req.method() == Method::HEAD {
            return finish(builder, Vec::new());
        }
        finish(builder, body.to_vec())
    }

    fn check_preconditions<B>(
        req: &Request<B>,
        modified: Option<DateTime<Utc>>,
    ) -> Option<StatusCode> {
        let get_or_head = req.method() == Method::GET || req.method() == Method::HEAD;

        match header_str(req, header::IF_MATCH) {
            Some(value) if value.trim() != "*" => return Some(StatusCode::PRECONDITION_FAILED),
            Some(_) => {}
            None => {
                let since = header_str(req, header::IF_UNMODIFIED_SINCE).and_then(parse_http_date);
                if let (Some(since), Some(date)) = (since, modified) {
                    if date > since {
                        return Some(StatusCode::PRECONDITION_FAILED);
                    }
                }
            }
        }

        match header_str(req, header::IF_NONE_MATCH) {
            Some(value) if value.trim() == "*" => {
                if get_or_head {
                    return Some(StatusCode::NOT_MODIFIED);
                }
                return Some(StatusCode::PRECONDITION_FAILED);
            }
            Some(_) => {}
            None if get_or_head => {
                let since = header_str(req, header::IF_MODIFIED_SINCE).and_then(parse_http_date);
                if let (Some(since), Some(date)) = (since, modified) {
                    if date <= since {
                        return Some(StatusCode::NOT_MODIFIED);
                    }
                }
            }
            None => {}
        }
        None
    }

    fn requested_range<B>(
        req: &Request<B>,
        modified: Option<DateTime<Utc>>,
        size: usize,
    ) -> ByteRange {
        let Some(spec) = header_str(req, header::RANGE) else {
            return ByteRange::Full;
        };
        if let Some(if_range) = header_str(req, header::IF_RANGE) {
            let fresh = matches!(
                (parse_http_date(if_range), modified),
                (Some(date), Some(modified)) if date == modified
            );
            if !fresh {
                return ByteRange::Full;
            }
        }
        parse_range(spec, size)
    }

    fn parse_range(spec: &str, size: usize) -> ByteRange {
        if size == 0 {
            return ByteRange::Full;
        }
        let Some(ranges) = spec.trim().strip_prefix("bytes=") else {
            return ByteRange::Unsatisfiable;
        };
        if ranges.contains(',') {
            return ByteRange::Full;
        }
        let Some((start, end)) = ranges.split_once('-') else {
            return ByteRange::Unsatisfiable;
        };

        let (start, end) = (start.trim(), end.trim());
        let range = if start.is_empty() {
            end.parse::<usize>()
                .ok()
                .filter(|&len| len > 0)
                .map(|len| (size - len.min(size), size))
        } else {
            bounded_range(start, end, size)
        };
        match range {
            Some((start, end)) => ByteRange::Partial(start, end),
            None => ByteRange::Unsatisfiable,
        }
    }

    fn bounded_range(start: &str, end: &str, size: usize) -> Option<(usize, usize)> {
        let start = start.parse::<usize>().ok().filter(|&s| s < size)?;
        if end.is_empty() {
            return Some((start, size));
        }
        let end = end.parse::<usize>().ok().filter(|&e| e >= start)?;
        Some((start, end.min(size - 1) + 1))
    }

    fn content_type(file: &File) -> String {
        match mime_guess::from_path(file.name()).first() {
            Some(mime) if mime.type_() == mime_guess::mime::TEXT => format!("{mime}; charset=utf-8"),
            Some(mime) => mime.to_string(),
            None if std::str::from_utf8(file.data()).is_ok() => "text/plain; charset=utf-8".into(),
            None => "application/octet-stream".into(),
        }
    }

    fn error_response(status: StatusCode, message: &str) -> Response<Vec<u8>> {
        let builder = Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .header(header::X_CONTENT_TYPE_OPTIONS, "nosniff");
        finish(builder, message.as_bytes().to_vec())
    }

    fn finish(builder: response::Builder, body: Vec<u8>) -> Response<Vec<u8>> {
        builder.body(body).unwrap_or_else(|_| {
            let mut res = Response::new(Vec::new());
            *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            res
        })
    }

    fn header_str<B>(req: &Request<B>, name: header::HeaderName) -> Option<&str> {
        req.headers().get(name).and_then(|v| v.to_str().ok())
    }

    /// Resolves `.` and `..` segments of a rooted path.
    fn clean_path(name: &str) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for part in name.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                _ => parts.push(part),
            }
        }
        format!("/{}", parts.join("/"))
    }

    /// IMF-fixdate, always in GMT.
    const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

    /// Modification time truncated to whole seconds, or `None` at the epoch.
    fn last_modified(file: &File) -> Option<DateTime<Utc>> {
        if file.mod_time_secs == 0 && file.mod_time_nanos == 0 {
            return None;
        }
        DateTime::from_timestamp(file.mod_time_secs, 0)
    }

    fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc2822(value.trim())
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }

    /// Inserts `-<hash>` into the file name of `name`, ahead of its extension.
    pub fn join_name_hash(name: &str, hash: &str) -> String {
        let (dir, file) = split_path(name);
        match file.find('.') {
            Some(i) => format!("{dir}{}-{hash}{}", &file[..i], &file[i..]),
            None => format!("{name}-{hash}"),
        }
    }

    /// Removes an embedded hash from `name`. Names without one are returned
    /// unchanged.
    pub fn trim_name_hash(name: &str) -> String {
        let (dir, file) = split_path(name);
        let (stem, ext) = file.split_at(file.find('.').unwrap_or(file.len()));
        match strip_hash(stem) {
            Some(base) => format!("{dir}{base}{ext}"),
            None => name.to_string(),
        }
    }

    /// Reports whether `name` carries an embedded hash.
    pub fn has_name_hash(name: &str) -> bool {
        let (_, file) = split_path(name);
        let stem = file.find('.').map_or(file, |i| &file[..i]);
        strip_hash(stem).is_some()
    }

    fn strip_hash(stem: &str) -> Option<&str> {
        let at = stem.len().checked_sub(41)?;
        if stem.as_bytes()[at] != b'-' || !HASH_REGEX.is_match(&stem[at + 1..]) {
            return None;
        }
        Some(&stem[..at])
    }

    fn split_path(name: &str) -> (&str, &str) {
        name.split_at(name.rfind('/').map_or(0, |i| i + 1))
    }

    static HASH_REGEX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new("^[0-9a-f]+$").expect("hash pattern is valid"));
}

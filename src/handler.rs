use anyhow::Context;
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::{
    command::Command,
    error::{DirectoryError, DirectoryResult},
    response::Response,
    store::ContactStore,
};

#[async_trait]
pub trait CommandHandler {
    async fn handle(&self, command: Command) -> Response;
}

#[async_trait]
impl CommandHandler for ContactStore {
    async fn handle(&self, command: Command) -> Response {
        let res: DirectoryResult<Response> = match command {
            Command::Create {
                phone_number,
                contact_name,
            } => {
                info!(%phone_number, "Handling create");
                self.create(&phone_number, &contact_name)
                    .await
                    .map(|_| Response::created())
            }
            Command::Lookup(phone_number) => {
                info!(%phone_number, "Handling lookup");
                self.lookup(&phone_number).await.map(Response::contact_name)
            }
            Command::List => {
                info!("Handling list");
                Ok(Response::contacts(self.list().await))
            }
            Command::Delete(phone_number) => {
                info!(%phone_number, "Handling delete");
                self.delete(&phone_number).await.map(Response::deleted)
            }
            Command::Clear => {
                info!("Handling clear");
                self.clear().await;
                Ok(Response::cleared())
            }
        };

        res.unwrap_or_else(|e| {
            warn!(error = %e, "Rejected request");
            Response::from_error(&e)
        })
    }
}

/// Longest request line accepted, newline excluded.
pub const MAX_LINE_LEN: usize = 8 * 1024;

/// Reads the next request line into `buf`. `None` at end of input.
///
/// An over-long line is consumed up to its newline and reported as
/// `RequestTooLong`, so at most `MAX_LINE_LEN + 1` bytes are buffered.
async fn read_request<R>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> anyhow::Result<Option<DirectoryResult<String>>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let n = (&mut *reader)
        .take(MAX_LINE_LEN as u64 + 1)
        .read_until(b'\n', buf)
        .await
        .context("Read request")?;
    if n == 0 {
        return Ok(None);
    }

    if buf.last() != Some(&b'\n') && buf.len() > MAX_LINE_LEN {
        loop {
            buf.clear();
            let n = (&mut *reader)
                .take(MAX_LINE_LEN as u64)
                .read_until(b'\n', buf)
                .await
                .context("Skip over-long request")?;
            if n == 0 || buf.last() == Some(&b'\n') {
                break;
            }
        }
        return Ok(Some(Err(DirectoryError::RequestTooLong { max: MAX_LINE_LEN })));
    }

    let line = std::str::from_utf8(buf.as_slice())
        .map(|line| line.trim_end_matches(['\n', '\r']).to_string())
        .map_err(DirectoryError::from);
    Ok(Some(line))
}

/// Answers one request per line until `reader` is exhausted.
pub async fn serve<H, R, W>(handler: &H, mut reader: R, mut writer: W) -> anyhow::Result<()>
where
    H: CommandHandler + Sync + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    while let Some(line) = read_request(&mut reader, &mut buf).await? {
        let parsed = match line {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => Command::parse(&line),
            Err(e) => Err(e),
        };

        let res = match parsed {
            Ok(cmd) => handler.handle(cmd).await,
            Err(e) => {
                warn!(error = %e, "Unparseable request");
                Response::from_error(&e)
            }
        };

        let mut out = res.to_line().context("Encode response")?;
        out.push('\n');
        writer
            .write_all(out.as_bytes())
            .await
            .context("Send response")?;
        writer.flush().await.context("Flush response")?;
    }

    Ok(())
}

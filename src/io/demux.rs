use std::collections::HashMap;
use std::io::{self, Read, Write};
use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard};
use std::thread::{self, ThreadId};

/// One shared object standing in for a separate stream per thread
///
/// Each thread binds its own stream and all reads or writes made through the
/// shared object go to the stream bound by the calling thread. Threads with
/// nothing bound read end of input and have their writes discarded.
///
/// A binding made with [`Demux::bind`] outlives its thread: the entry stays in
/// the table until [`Demux::unbind`] is called from that thread. Use
/// [`Demux::bind_scoped`] to have it removed automatically.
pub struct Demux<S: ?Sized> {
    channels: Mutex<HashMap<ThreadId, Box<S>>>,
}

/// Routes reads to the stream bound by the calling thread
pub type DemuxReader = Demux<dyn Read + Send>;

/// Routes writes to the stream bound by the calling thread
pub type DemuxWriter = Demux<dyn Write + Send>;

impl<S: ?Sized> Demux<S> {
    pub fn new() -> Self {
        Self {
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Binds `stream` to the calling thread, returning the stream it replaces
    ///
    /// The calling thread must [`unbind`](Demux::unbind) before it exits.
    pub fn bind(&self, stream: Box<S>) -> io::Result<Option<Box<S>>> {
        let id = thread::current().id();
        log::trace!("Binding demux stream for {:?}", id);
        Ok(self.lock()?.insert(id, stream))
    }

    /// Removes the calling thread's stream
    pub fn unbind(&self) -> io::Result<Option<Box<S>>> {
        let id = thread::current().id();
        log::trace!("Unbinding demux stream for {:?}", id);
        Ok(self.lock()?.remove(&id))
    }

    /// Binds `stream` to the calling thread until the returned guard is dropped
    ///
    /// Any stream already bound by this thread is dropped.
    pub fn bind_scoped(&self, stream: Box<S>) -> io::Result<Binding<'_, S>> {
        self.bind(stream)?;
        Ok(Binding {
            demux: self,
            id: thread::current().id(),
            _not_send: PhantomData,
        })
    }

    pub fn is_bound(&self) -> io::Result<bool> {
        Ok(self.lock()?.contains_key(&thread::current().id()))
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, HashMap<ThreadId, Box<S>>>> {
        self.channels
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "demux channel table poisoned"))
    }

    /// Runs `op` on the calling thread's stream without holding the table lock
    ///
    /// Only the owning thread ever touches its entry, so taking it out for the
    /// duration of the call leaves other threads unaffected.
    fn with_channel<T>(&self, op: impl FnOnce(Option<&mut S>) -> io::Result<T>) -> io::Result<T> {
        let id = thread::current().id();
        let taken = self.lock()?.remove(&id);
        match taken {
            None => op(None),
            Some(mut stream) => {
                let result = op(Some(&mut *stream));
                self.lock()?.insert(id, stream);
                result
            }
        }
    }
}

/// Removes a thread's binding when dropped
///
/// Returned by [`Demux::bind_scoped`]. It stays on the thread that created it.
#[must_use = "the stream is unbound as soon as the binding is dropped"]
pub struct Binding<'a, S: ?Sized> {
    demux: &'a Demux<S>,
    id: ThreadId,
    _not_send: PhantomData<*const ()>,
}

impl<S: ?Sized> Drop for Binding<'_, S> {
    fn drop(&mut self) {
        log::trace!("Dropping demux binding for {:?}", self.id);
        if let Ok(mut channels) = self.demux.channels.lock() {
            channels.remove(&self.id);
        }
    }
}

impl<S: ?Sized> Default for Demux<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl Read for &Demux<dyn Read + Send> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.with_channel(|stream| match stream {
            Some(stream) => stream.read(buf),
            None => Ok(0),
        })
    }
}

impl Read for Demux<dyn Read + Send> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (&*self).read(buf)
    }
}

impl Write for &Demux<dyn Write + Send> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_channel(|stream| match stream {
            Some(stream) => stream.write(buf),
            None => Ok(buf.len()),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_channel(|stream| match stream {
            Some(stream) => stream.flush(),
            None => Ok(()),
        })
    }
}

impl Write for Demux<dyn Write + Send> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&*self).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        (&*self).flush()
    }
}

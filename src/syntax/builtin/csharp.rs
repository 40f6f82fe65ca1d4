//! C# profile

use super::Profile;

const KEYWORDS: &str = "abstract add as ascending async await base bool break by byte case \
catch char checked class const continue decimal default delegate descending do double \
dynamic else enum equals explicit extern false finally fixed float for foreach from get \
global goto group if implicit in int interface internal into is join let lock long \
namespace new null object on operator orderby out override params partial private \
protected public readonly ref remove return sbyte sealed select set short sizeof \
stackalloc static string struct switch this throw true try typeof uint ulong unchecked \
unsafe ushort using value var virtual void volatile where while yield";

// Public types of the core library that show up in everyday code
const AMBIENT_TYPES: &[&str] = &[
    "Action", "Activator", "AppDomain", "ArgumentException", "ArgumentNullException",
    "ArgumentOutOfRangeException", "Array", "ArraySegment", "Attribute", "BitConverter",
    "Boolean", "Buffer", "Byte", "CancellationToken", "Char", "Console", "ConsoleColor",
    "ConsoleKey", "Convert", "DateTime", "DateTimeOffset", "DayOfWeek", "DBNull", "Decimal",
    "Delegate", "Dictionary", "Double", "Encoding", "Enum", "Environment", "EventArgs",
    "EventHandler", "Exception", "File", "FileStream", "Func", "GC", "Guid", "HashSet",
    "IComparable", "IDisposable", "IEnumerable", "IEnumerator", "IEquatable", "IList",
    "Int16", "Int32", "Int64", "IntPtr", "InvalidOperationException", "KeyValuePair",
    "Lazy", "List", "Math", "MathF", "NotImplementedException", "NotSupportedException",
    "Nullable", "Object", "ObjectDisposedException", "OperationCanceledException", "Path",
    "Predicate", "Queue", "Random", "ReadOnlySpan", "SByte", "Single", "Span", "Stack",
    "Stream", "StreamReader", "StreamWriter", "String", "StringBuilder", "StringComparison",
    "Task", "TextReader", "TextWriter", "Thread", "TimeSpan", "Tuple", "Type", "UInt16",
    "UInt32", "UInt64", "UIntPtr", "Uri", "ValueTask", "ValueTuple", "Version", "Void",
];

pub fn csharp_profile() -> Profile {
    Profile {
        name: "csharp",
        keywords: KEYWORDS,
        contextual: "",
        ambient_types: AMBIENT_TYPES,
    }
}
